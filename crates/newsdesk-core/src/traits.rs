//! Capability provider abstractions.
//!
//! The host platform supplies permissions, the camera, location services,
//! the shared media library and URL handling. Each is modelled as an async
//! trait so flows can run against real platform bindings or the mocks in
//! [`crate::mock`].

use async_trait::async_trait;

use newsdesk_types::{
    Address, Capability, CaptureOptions, CaptureResult, Coordinates, LocationAccuracy,
    PermissionStatus,
};

use crate::error::Result;

/// Grants or denies access to device capabilities.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// Ask the user for access to `capability`.
    async fn request(&self, capability: Capability) -> Result<PermissionStatus>;
}

/// Launches the camera capture interface.
#[async_trait]
pub trait CameraProvider: Send + Sync {
    /// Capture one image. Returns [`CaptureResult::Cancelled`] when the user
    /// backs out.
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureResult>;
}

/// Position fixes and reverse geocoding.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Current device position.
    async fn current_position(&self, accuracy: LocationAccuracy) -> Result<Coordinates>;

    /// Resolve a position to zero or more address candidates, best first.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<Address>>;
}

/// The device's shared photo gallery.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Copy the image behind `image_handle` into the gallery.
    async fn save(&self, image_handle: &str) -> Result<()>;
}

/// Opens external URLs in another application.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Whether some installed application can handle `url`.
    async fn can_open(&self, url: &str) -> Result<bool>;

    /// Hand `url` to the application that handles it.
    async fn open(&self, url: &str) -> Result<()>;
}

/// The set of capability providers an application runs against.
///
/// # Example
///
/// ```ignore
/// use newsdesk_core::{Platform, Result};
/// use newsdesk_types::Capability;
///
/// async fn can_use_camera<P: Platform>(platform: &P) -> Result<bool> {
///     let status = platform.permissions().request(Capability::Camera).await?;
///     Ok(status.is_granted())
/// }
/// ```
pub trait Platform: Send + Sync {
    /// Permission prompts.
    fn permissions(&self) -> &dyn PermissionProvider;

    /// Camera.
    fn camera(&self) -> &dyn CameraProvider;

    /// Location services.
    fn location(&self) -> &dyn LocationProvider;

    /// Shared media library.
    fn media_library(&self) -> &dyn MediaLibrary;

    /// External URL handling.
    fn url_opener(&self) -> &dyn UrlOpener;
}
