//! Mock capability providers for testing.
//!
//! [`MockPlatform`] implements [`Platform`] with in-memory providers so the
//! capture, download and go-live flows can run without a device.
//!
//! # Features
//!
//! - **Scripted answers**: Permission grants, geocode candidates and camera results
//! - **Failure injection**: Make any provider return an error
//! - **Latency simulation**: Add artificial delays to provider calls
//! - **Hanging providers**: Make a provider never answer, to exercise cancellation
//! - **Call recording**: Inspect what each provider was asked to do

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use newsdesk_types::{
    Address, Capability, CaptureOptions, CaptureResult, Coordinates, LocationAccuracy,
    PermissionStatus,
};

use crate::error::{Error, Result};
use crate::traits::{
    CameraProvider, LocationProvider, MediaLibrary, PermissionProvider, Platform, UrlOpener,
};

fn locked<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Latency and hang settings shared by every mock provider.
#[derive(Debug, Default)]
pub struct Behavior {
    /// Simulated latency in milliseconds (0 = no delay).
    latency_ms: AtomicU64,
    never_resolve: AtomicBool,
}

impl Behavior {
    /// Delay every call by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Make every call hang forever.
    pub fn set_never_resolve(&self, hang: bool) {
        self.never_resolve.store(hang, Ordering::Relaxed);
    }

    async fn wait(&self) {
        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.never_resolve.load(Ordering::Relaxed) {
            std::future::pending::<()>().await;
        }
    }
}

/// Permission prompts answered from fixed grants.
#[derive(Debug)]
pub struct MockPermissions {
    camera: AtomicBool,
    location: AtomicBool,
    media_library: AtomicBool,
    fails: AtomicBool,
    requests: Mutex<Vec<Capability>>,
    /// Latency and hang settings.
    pub behavior: Behavior,
}

impl MockPermissions {
    fn new(camera: bool, location: bool, media_library: bool) -> Self {
        Self {
            camera: AtomicBool::new(camera),
            location: AtomicBool::new(location),
            media_library: AtomicBool::new(media_library),
            fails: AtomicBool::new(false),
            requests: Mutex::new(Vec::new()),
            behavior: Behavior::default(),
        }
    }

    fn flag(&self, capability: Capability) -> &AtomicBool {
        match capability {
            Capability::Camera => &self.camera,
            Capability::Location => &self.location,
            Capability::MediaLibrary => &self.media_library,
        }
    }

    /// Change the answer for `capability`.
    pub fn set_granted(&self, capability: Capability, granted: bool) {
        self.flag(capability).store(granted, Ordering::Relaxed);
    }

    /// Make requests return an error.
    pub fn set_fails(&self, fails: bool) {
        self.fails.store(fails, Ordering::Relaxed);
    }

    /// Capabilities requested so far, in order.
    pub fn requests(&self) -> Vec<Capability> {
        locked(&self.requests).clone()
    }
}

#[async_trait]
impl PermissionProvider for MockPermissions {
    async fn request(&self, capability: Capability) -> Result<PermissionStatus> {
        locked(&self.requests).push(capability);
        self.behavior.wait().await;
        if self.fails.load(Ordering::Relaxed) {
            return Err(Error::provider("permission request", "Mock failure"));
        }
        Ok(PermissionStatus::from(self.flag(capability).load(Ordering::Relaxed)))
    }
}

/// Camera returning a scripted result.
#[derive(Debug)]
pub struct MockCamera {
    result: Mutex<CaptureResult>,
    fails: AtomicBool,
    capture_count: AtomicU32,
    last_options: Mutex<Option<CaptureOptions>>,
    /// Latency and hang settings.
    pub behavior: Behavior,
}

impl MockCamera {
    fn new(result: CaptureResult) -> Self {
        Self {
            result: Mutex::new(result),
            fails: AtomicBool::new(false),
            capture_count: AtomicU32::new(0),
            last_options: Mutex::new(None),
            behavior: Behavior::default(),
        }
    }

    /// Result returned by later captures.
    pub fn set_result(&self, result: CaptureResult) {
        *locked(&self.result) = result;
    }

    /// Make captures return an error.
    pub fn set_fails(&self, fails: bool) {
        self.fails.store(fails, Ordering::Relaxed);
    }

    /// Number of times the camera was launched.
    pub fn capture_count(&self) -> u32 {
        self.capture_count.load(Ordering::Relaxed)
    }

    /// Options passed to the most recent capture.
    pub fn last_options(&self) -> Option<CaptureOptions> {
        *locked(&self.last_options)
    }
}

#[async_trait]
impl CameraProvider for MockCamera {
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureResult> {
        self.capture_count.fetch_add(1, Ordering::Relaxed);
        *locked(&self.last_options) = Some(*options);
        self.behavior.wait().await;
        if self.fails.load(Ordering::Relaxed) {
            return Err(Error::Camera("Mock failure".to_string()));
        }
        Ok(locked(&self.result).clone())
    }
}

/// Location services with a fixed position and scripted geocode candidates.
#[derive(Debug)]
pub struct MockLocation {
    position: Mutex<Coordinates>,
    candidates: Mutex<Vec<Address>>,
    position_fails: AtomicBool,
    geocode_fails: AtomicBool,
    position_requests: AtomicU32,
    geocode_requests: AtomicU32,
    last_accuracy: Mutex<Option<LocationAccuracy>>,
    /// Latency and hang settings.
    pub behavior: Behavior,
}

impl MockLocation {
    fn new(position: Coordinates, candidates: Vec<Address>) -> Self {
        Self {
            position: Mutex::new(position),
            candidates: Mutex::new(candidates),
            position_fails: AtomicBool::new(false),
            geocode_fails: AtomicBool::new(false),
            position_requests: AtomicU32::new(0),
            geocode_requests: AtomicU32::new(0),
            last_accuracy: Mutex::new(None),
            behavior: Behavior::default(),
        }
    }

    /// Replace the geocode candidates.
    pub fn set_candidates(&self, candidates: Vec<Address>) {
        *locked(&self.candidates) = candidates;
    }

    /// Make position fixes return an error.
    pub fn set_position_fails(&self, fails: bool) {
        self.position_fails.store(fails, Ordering::Relaxed);
    }

    /// Make reverse geocoding return an error.
    pub fn set_geocode_fails(&self, fails: bool) {
        self.geocode_fails.store(fails, Ordering::Relaxed);
    }

    /// Number of position fixes requested.
    pub fn position_requests(&self) -> u32 {
        self.position_requests.load(Ordering::Relaxed)
    }

    /// Number of reverse geocode requests.
    pub fn geocode_requests(&self) -> u32 {
        self.geocode_requests.load(Ordering::Relaxed)
    }

    /// Accuracy asked for by the most recent position fix.
    pub fn last_accuracy(&self) -> Option<LocationAccuracy> {
        *locked(&self.last_accuracy)
    }
}

#[async_trait]
impl LocationProvider for MockLocation {
    async fn current_position(&self, accuracy: LocationAccuracy) -> Result<Coordinates> {
        self.position_requests.fetch_add(1, Ordering::Relaxed);
        *locked(&self.last_accuracy) = Some(accuracy);
        self.behavior.wait().await;
        if self.position_fails.load(Ordering::Relaxed) {
            return Err(Error::LocationUnavailable("Mock failure".to_string()));
        }
        Ok(*locked(&self.position))
    }

    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<Vec<Address>> {
        self.geocode_requests.fetch_add(1, Ordering::Relaxed);
        self.behavior.wait().await;
        if self.geocode_fails.load(Ordering::Relaxed) {
            return Err(Error::provider("reverse geocode", "Mock failure"));
        }
        Ok(locked(&self.candidates).clone())
    }
}

/// Media library that records saved handles.
#[derive(Debug, Default)]
pub struct MockMediaLibrary {
    saved: Mutex<Vec<String>>,
    save_count: AtomicU32,
    fails: AtomicBool,
    /// Latency and hang settings.
    pub behavior: Behavior,
}

impl MockMediaLibrary {
    /// Make saves return an error.
    pub fn set_fails(&self, fails: bool) {
        self.fails.store(fails, Ordering::Relaxed);
    }

    /// Handles saved successfully, in order.
    pub fn saved(&self) -> Vec<String> {
        locked(&self.saved).clone()
    }

    /// Number of save attempts.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MediaLibrary for MockMediaLibrary {
    async fn save(&self, image_handle: &str) -> Result<()> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        self.behavior.wait().await;
        if self.fails.load(Ordering::Relaxed) {
            return Err(Error::MediaSave("Mock failure".to_string()));
        }
        locked(&self.saved).push(image_handle.to_string());
        Ok(())
    }
}

/// URL opener that records opened URLs.
#[derive(Debug)]
pub struct MockUrlOpener {
    installed: AtomicBool,
    opened: Mutex<Vec<String>>,
    /// Latency and hang settings.
    pub behavior: Behavior,
}

impl MockUrlOpener {
    fn new(installed: bool) -> Self {
        Self {
            installed: AtomicBool::new(installed),
            opened: Mutex::new(Vec::new()),
            behavior: Behavior::default(),
        }
    }

    /// Whether a handler for URLs is installed.
    pub fn set_installed(&self, installed: bool) {
        self.installed.store(installed, Ordering::Relaxed);
    }

    /// URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        locked(&self.opened).clone()
    }
}

#[async_trait]
impl UrlOpener for MockUrlOpener {
    async fn can_open(&self, _url: &str) -> Result<bool> {
        self.behavior.wait().await;
        Ok(self.installed.load(Ordering::Relaxed))
    }

    async fn open(&self, url: &str) -> Result<()> {
        self.behavior.wait().await;
        if !self.installed.load(Ordering::Relaxed) {
            return Err(Error::provider("open url", format!("No handler for {}", url)));
        }
        locked(&self.opened).push(url.to_string());
        Ok(())
    }
}

/// A mock platform for testing.
///
/// # Example
///
/// ```
/// use newsdesk_core::{MockPlatform, Platform};
/// use newsdesk_types::{Capability, PermissionStatus};
///
/// #[tokio::main]
/// async fn main() {
///     let platform = MockPlatform::builder().camera_permission(false).build();
///     let status = platform.permissions().request(Capability::Camera).await.unwrap();
///     assert_eq!(status, PermissionStatus::Denied);
/// }
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    /// Permission prompts.
    pub permissions: MockPermissions,
    /// Camera.
    pub camera: MockCamera,
    /// Location services.
    pub location: MockLocation,
    /// Media library.
    pub media: MockMediaLibrary,
    /// URL handling.
    pub urls: MockUrlOpener,
}

impl MockPlatform {
    /// Create a mock platform with every permission granted.
    pub fn new() -> Self {
        MockPlatformBuilder::default().build()
    }

    /// Start building a mock platform.
    pub fn builder() -> MockPlatformBuilder {
        MockPlatformBuilder::default()
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    fn permissions(&self) -> &dyn PermissionProvider {
        &self.permissions
    }

    fn camera(&self) -> &dyn CameraProvider {
        &self.camera
    }

    fn location(&self) -> &dyn LocationProvider {
        &self.location
    }

    fn media_library(&self) -> &dyn MediaLibrary {
        &self.media
    }

    fn url_opener(&self) -> &dyn UrlOpener {
        &self.urls
    }
}

/// Builder for creating mock platforms with custom settings.
#[derive(Debug, Clone)]
pub struct MockPlatformBuilder {
    camera_permission: bool,
    location_permission: bool,
    media_permission: bool,
    position: Coordinates,
    candidates: Vec<Address>,
    capture: CaptureResult,
    url_handler_installed: bool,
}

impl Default for MockPlatformBuilder {
    fn default() -> Self {
        Self {
            camera_permission: true,
            location_permission: true,
            media_permission: true,
            position: Coordinates::new(40.7128, -74.0060),
            candidates: vec![
                Address::builder()
                    .street("Broadway")
                    .city("New York")
                    .subregion("New York County")
                    .region("NY")
                    .country("United States")
                    .build(),
            ],
            capture: CaptureResult::captured("file:///mock/photo.jpg"),
            url_handler_installed: true,
        }
    }
}

impl MockPlatformBuilder {
    /// Grant or refuse camera access.
    pub fn camera_permission(mut self, granted: bool) -> Self {
        self.camera_permission = granted;
        self
    }

    /// Grant or refuse location access.
    pub fn location_permission(mut self, granted: bool) -> Self {
        self.location_permission = granted;
        self
    }

    /// Grant or refuse media library access.
    pub fn media_permission(mut self, granted: bool) -> Self {
        self.media_permission = granted;
        self
    }

    /// Position returned by position fixes.
    pub fn position(mut self, position: Coordinates) -> Self {
        self.position = position;
        self
    }

    /// Candidates returned by reverse geocoding.
    pub fn geocode(mut self, candidates: Vec<Address>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Result returned by the camera.
    pub fn capture(mut self, result: CaptureResult) -> Self {
        self.capture = result;
        self
    }

    /// Whether a handler for URLs is installed.
    pub fn url_handler_installed(mut self, installed: bool) -> Self {
        self.url_handler_installed = installed;
        self
    }

    /// Build the mock platform.
    pub fn build(self) -> MockPlatform {
        MockPlatform {
            permissions: MockPermissions::new(
                self.camera_permission,
                self.location_permission,
                self.media_permission,
            ),
            camera: MockCamera::new(self.capture),
            location: MockLocation::new(self.position, self.candidates),
            media: MockMediaLibrary::default(),
            urls: MockUrlOpener::new(self.url_handler_installed),
        }
    }
}
