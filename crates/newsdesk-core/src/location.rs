//! Best-effort location lookup for geotagging.

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use newsdesk_types::{Address, Capability, LocationAccuracy, PermissionStatus};

use crate::cancel::cancellable;
use crate::error::{Error, Result};
use crate::notice::{Notice, NoticeDispatcher};
use crate::traits::Platform;

/// What a location lookup produced.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationLookup {
    /// The first geocode candidate.
    Resolved(Address),
    /// The geocoder returned no candidates.
    NoMatch,
    /// The user refused location access.
    PermissionDenied,
    /// Position fix or geocoding failed.
    Unavailable(String),
}

impl LocationLookup {
    /// The resolved address, if any.
    pub fn address(&self) -> Option<&Address> {
        match self {
            LocationLookup::Resolved(address) => Some(address),
            _ => None,
        }
    }

    /// Short place name and full address derived from the lookup.
    pub fn tags(&self) -> (Option<String>, Option<String>) {
        match self.address() {
            Some(address) => (address.city_name(), address.precise_location()),
            None => (None, None),
        }
    }
}

/// Ask for location permission, then fix the position at high accuracy and
/// reverse-geocode it.
///
/// Denial and lookup failures publish a notice and degrade to an untagged
/// result. Only cancellation is returned as an error.
pub async fn lookup_location<P: Platform + ?Sized>(
    platform: &P,
    notices: &NoticeDispatcher,
    token: &CancellationToken,
) -> Result<LocationLookup> {
    let status = match cancellable(
        token,
        "location permission",
        platform.permissions().request(Capability::Location),
    )
    .await
    {
        Ok(status) => status,
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            warn!("Location permission request failed: {}", e);
            PermissionStatus::Denied
        }
    };

    if !status.is_granted() {
        debug!("Location permission denied; photo will not be tagged");
        notices.notify(Notice::location_permission_denied());
        return Ok(LocationLookup::PermissionDenied);
    }

    match resolve_address(platform, token).await {
        Ok(Some(address)) => Ok(LocationLookup::Resolved(address)),
        Ok(None) => {
            debug!("Reverse geocoding returned no candidates");
            Ok(LocationLookup::NoMatch)
        }
        Err(e) if e.is_cancelled() => Err(e),
        Err(e) => {
            warn!("Error getting location: {}", e);
            notices.notify(Notice::location_unavailable());
            Ok(LocationLookup::Unavailable(e.to_string()))
        }
    }
}

async fn resolve_address<P: Platform + ?Sized>(
    platform: &P,
    token: &CancellationToken,
) -> Result<Option<Address>> {
    let location = platform.location();

    let position = cancellable(
        token,
        "current position",
        location.current_position(LocationAccuracy::High),
    )
    .await?;
    debug!("Position fix: {}", position);

    let candidates = cancellable(token, "reverse geocode", location.reverse_geocode(position))
        .await
        .map_err(|e| match e {
            Error::Cancelled { .. } | Error::LocationUnavailable(_) => e,
            other => Error::LocationUnavailable(other.to_string()),
        })?;

    Ok(candidates.into_iter().next())
}
