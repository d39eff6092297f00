//! Desktop capability providers.
//!
//! The terminal has no camera, GPS or photo gallery, so each capability is
//! backed by something a desktop does have: image files, the config file and
//! a directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use newsdesk_core::{
    Address, CameraProvider, Capability, CaptureOptions, CaptureResult, Coordinates, Error,
    LocationAccuracy, LocationProvider, MediaLibrary, PermissionProvider, PermissionStatus,
    Platform, Result, UrlOpener,
};

use crate::config::{Config, LocationConfig, PermissionsConfig};

const FILE_SCHEME: &str = "file://";

/// Turn a local path into an image handle.
pub fn path_to_handle(path: &Path) -> String {
    format!("{}{}", FILE_SCHEME, path.display())
}

/// Turn an image handle back into a local path.
pub fn handle_to_path(handle: &str) -> PathBuf {
    PathBuf::from(handle.strip_prefix(FILE_SCHEME).unwrap_or(handle))
}

/// Permission prompts answered from the config file.
#[derive(Debug, Clone)]
pub struct ConfigPermissions {
    grants: PermissionsConfig,
}

#[async_trait]
impl PermissionProvider for ConfigPermissions {
    async fn request(&self, capability: Capability) -> Result<PermissionStatus> {
        let granted = match capability {
            Capability::Camera => self.grants.camera,
            Capability::Location => self.grants.location,
            Capability::MediaLibrary => self.grants.media_library,
        };
        debug!("Permission for {}: {}", capability, granted);
        Ok(PermissionStatus::from(granted))
    }
}

/// "Camera" that imports an existing image file.
///
/// With no source file the capture counts as cancelled by the user.
#[derive(Debug, Clone)]
pub struct FileCamera {
    source: Option<PathBuf>,
    photos_dir: PathBuf,
}

#[async_trait]
impl CameraProvider for FileCamera {
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureResult> {
        let Some(source) = &self.source else {
            return Ok(CaptureResult::Cancelled);
        };
        debug!("Importing {} ({:?})", source.display(), options);

        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let target = self
            .photos_dir
            .join(format!("{}.{}", uuid::Uuid::new_v4(), extension));

        tokio::fs::create_dir_all(&self.photos_dir)
            .await
            .map_err(|e| Error::Camera(format!("{}: {}", self.photos_dir.display(), e)))?;
        tokio::fs::copy(source, &target)
            .await
            .map_err(|e| Error::Camera(format!("{}: {}", source.display(), e)))?;

        info!("Captured {}", target.display());
        Ok(CaptureResult::captured(path_to_handle(&target)))
    }
}

/// Location services reporting a fixed, configured place.
#[derive(Debug, Clone)]
pub struct ConfiguredLocation {
    location: LocationConfig,
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    async fn current_position(&self, _accuracy: LocationAccuracy) -> Result<Coordinates> {
        self.location.coordinates().ok_or_else(|| {
            Error::LocationUnavailable("no latitude/longitude in config".to_string())
        })
    }

    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<Vec<Address>> {
        Ok(self.location.address().into_iter().collect())
    }
}

/// Gallery backed by a plain directory.
#[derive(Debug, Clone)]
pub struct DirectoryGallery {
    dir: PathBuf,
}

impl DirectoryGallery {
    /// Directory images are copied into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MediaLibrary for DirectoryGallery {
    async fn save(&self, image_handle: &str) -> Result<()> {
        let source = handle_to_path(image_handle);
        let name = source
            .file_name()
            .ok_or_else(|| Error::MediaSave(format!("not a file: {}", image_handle)))?;
        let target = self.dir.join(name);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::MediaSave(format!("{}: {}", self.dir.display(), e)))?;
        tokio::fs::copy(&source, &target)
            .await
            .map_err(|e| Error::MediaSave(format!("{}: {}", source.display(), e)))?;

        info!("Copied {} to {}", source.display(), target.display());
        Ok(())
    }
}

/// Opens URLs in the default browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserOpener;

#[async_trait]
impl UrlOpener for BrowserOpener {
    async fn can_open(&self, url: &str) -> Result<bool> {
        Ok(url.starts_with("https://") || url.starts_with("http://"))
    }

    async fn open(&self, url: &str) -> Result<()> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || open::that(&url))
            .await
            .map_err(|e| Error::provider("open url", e.to_string()))?
            .map_err(|e| Error::provider("open url", e.to_string()))
    }
}

/// The desktop provider bundle.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    permissions: ConfigPermissions,
    camera: FileCamera,
    location: ConfiguredLocation,
    gallery: DirectoryGallery,
    browser: BrowserOpener,
}

impl DesktopPlatform {
    /// Build providers from `config`, storing captured images under `data_dir`.
    pub fn new(config: &Config, data_dir: &Path) -> Self {
        Self {
            permissions: ConfigPermissions {
                grants: config.permissions.clone(),
            },
            camera: FileCamera {
                source: None,
                photos_dir: data_dir.join("photos"),
            },
            location: ConfiguredLocation {
                location: config.location.clone(),
            },
            gallery: DirectoryGallery {
                dir: config.resolve_gallery_dir(data_dir),
            },
            browser: BrowserOpener,
        }
    }

    /// Import `source` on the next capture.
    pub fn with_image(mut self, source: Option<PathBuf>) -> Self {
        self.camera.source = source;
        self
    }

    /// The gallery provider, for reporting where downloads land.
    pub fn gallery(&self) -> &DirectoryGallery {
        &self.gallery
    }
}

impl Platform for DesktopPlatform {
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
        &self.gallery
    }

    fn url_opener(&self) -> &dyn UrlOpener {
        &self.browser
    }
}
