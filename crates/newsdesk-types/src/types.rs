//! Core types for captured photos and the device capabilities behind them.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One user-captured photograph.
///
/// Records are identified by their `uri`. The location fields come from the
/// same reverse-geocode lookup, so in practice they are either both present
/// or both absent.
///
/// # Serialization
///
/// The persisted form uses the field name `preciseLocation` and writes absent
/// locations as explicit `null`:
///
/// ```
/// use newsdesk_types::PhotoRecord;
///
/// let record = PhotoRecord::new("file:///photos/a.jpg");
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"uri":"file:///photos/a.jpg","city":null,"preciseLocation":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhotoRecord {
    /// Opaque handle to the image resource.
    pub uri: String,
    /// Short place name (e.g. "Springfield").
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<String>,
    /// Full address: street, city, region and country joined with ", ".
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "preciseLocation", alias = "precise_location")
    )]
    pub precise_location: Option<String>,
}

impl PhotoRecord {
    /// Create a record with no location attached.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            city: None,
            precise_location: None,
        }
    }

    /// Attach the location derived from a geocoded address.
    #[must_use]
    pub fn with_address(mut self, address: &Address) -> Self {
        self.city = address.city_name();
        self.precise_location = address.precise_location();
        self
    }

    /// Attach explicit location strings.
    #[must_use]
    pub fn with_location(mut self, city: Option<String>, precise_location: Option<String>) -> Self {
        self.city = city;
        self.precise_location = precise_location;
        self
    }

    /// Whether any location information is attached.
    pub fn has_location(&self) -> bool {
        self.city.is_some() || self.precise_location.is_some()
    }
}

/// A reverse-geocoded address candidate.
///
/// Every component is independently optional. Empty strings are treated the
/// same as missing components.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    /// Street name and number.
    pub street: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Sub-region (county, district).
    pub subregion: Option<String>,
    /// Region (state, province).
    pub region: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

impl Address {
    /// Create a builder for constructing an `Address`.
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Short place name: the city, falling back to the sub-region.
    ///
    /// ```
    /// use newsdesk_types::Address;
    ///
    /// let address = Address::builder().subregion("Shelbyville County").build();
    /// assert_eq!(address.city_name().as_deref(), Some("Shelbyville County"));
    /// ```
    #[must_use]
    pub fn city_name(&self) -> Option<String> {
        non_empty(&self.city)
            .or_else(|| non_empty(&self.subregion))
            .map(str::to_string)
    }

    /// Street, city, region and country joined with ", ", skipping any
    /// component that is missing or empty.
    ///
    /// Returns `None` when none of the components are present.
    ///
    /// ```
    /// use newsdesk_types::Address;
    ///
    /// let address = Address::builder()
    ///     .city("Metropolis")
    ///     .region("NY")
    ///     .country("USA")
    ///     .build();
    /// assert_eq!(address.precise_location().as_deref(), Some("Metropolis, NY, USA"));
    /// ```
    #[must_use]
    pub fn precise_location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.street, &self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(non_empty)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Builder for constructing an [`Address`].
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    /// Set the street.
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = Some(street.into());
        self
    }

    /// Set the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = Some(city.into());
        self
    }

    /// Set the sub-region.
    pub fn subregion(mut self, subregion: impl Into<String>) -> Self {
        self.address.subregion = Some(subregion.into());
        self
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.address.region = Some(region.into());
        self
    }

    /// Set the country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.address.country = Some(country.into());
        self
    }

    /// Build the `Address`.
    #[must_use]
    pub fn build(self) -> Address {
        self.address
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// A device capability that requires user permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capability {
    /// Camera access.
    Camera,
    /// Foreground location access.
    Location,
    /// Write access to the shared media library.
    MediaLibrary,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
            Capability::Location => write!(f, "location"),
            Capability::MediaLibrary => write!(f, "media library"),
        }
    }
}

impl FromStr for Capability {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "camera" => Ok(Capability::Camera),
            "location" => Ok(Capability::Location),
            "media_library" | "media" | "gallery" => Ok(Capability::MediaLibrary),
            _ => Err(ParseError::UnknownCapability(s.to_string())),
        }
    }
}

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PermissionStatus {
    /// The user granted the capability.
    Granted,
    /// The user denied the capability.
    Denied,
}

impl PermissionStatus {
    /// Whether the capability was granted.
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl From<bool> for PermissionStatus {
    fn from(granted: bool) -> Self {
        if granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

/// Requested accuracy for a position fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocationAccuracy {
    /// Coarse, low-power fix.
    Low,
    /// Balanced accuracy.
    #[default]
    Balanced,
    /// Best available accuracy.
    High,
}

/// Options passed to the camera when launching a capture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureOptions {
    /// Let the user crop or edit before confirming.
    pub allows_editing: bool,
    /// Fixed aspect ratio as (width, height).
    pub aspect: (u16, u16),
    /// Compression quality in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect: (16, 9),
            quality: 0.7,
        }
    }
}

/// Result of a camera capture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CaptureResult {
    /// The user backed out of the camera.
    Cancelled,
    /// An image was captured.
    Captured {
        /// Handle to the captured image.
        image_handle: String,
    },
}

impl CaptureResult {
    /// Create a captured result for the given handle.
    pub fn captured(image_handle: impl Into<String>) -> Self {
        CaptureResult::Captured {
            image_handle: image_handle.into(),
        }
    }

    /// The image handle, if an image was captured.
    pub fn image_handle(&self) -> Option<&str> {
        match self {
            CaptureResult::Cancelled => None,
            CaptureResult::Captured { image_handle } => Some(image_handle),
        }
    }
}
