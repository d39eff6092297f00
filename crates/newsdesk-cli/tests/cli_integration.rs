//! CLI Integration Tests
//!
//! These tests run the `newsdesk` binary with an isolated home directory and
//! data directory, so they never touch the user's real configuration.
//!
//! ```
//! cargo test --package newsdesk-cli --test cli_integration
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// An isolated home and data directory for one test.
struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            home: tempfile::tempdir().expect("Failed to create temp dir"),
        };
        // Keep the feed fast and give the desktop location provider a fix
        sandbox.write_config(
            r#"
feed_delay_ms = 0

[location]
latitude = 40.7
longitude = -74.0
street = "5th Ave"
city = "Metropolis"
region = "NY"
country = "USA"
"#,
        );
        sandbox
    }

    fn config_dir(&self) -> std::path::PathBuf {
        self.home.path().join(".config")
    }

    fn data_dir(&self) -> std::path::PathBuf {
        self.home.path().join("data")
    }

    fn config_candidates(&self) -> Vec<std::path::PathBuf> {
        vec![
            self.config_dir().join("newsdesk").join("config.toml"),
            self.home
                .path()
                .join("Library")
                .join("Application Support")
                .join("newsdesk")
                .join("config.toml"),
        ]
    }

    fn write_config(&self, content: &str) {
        for path in self.config_candidates() {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    fn remove_config(&self) {
        for path in self.config_candidates() {
            let _ = fs::remove_file(path);
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_newsdesk"))
            .args(args)
            .arg("--data-dir")
            .arg(self.data_dir())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("XDG_DATA_HOME", self.home.path().join(".local/share"))
            .env_remove("NEWSDESK_DATA_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run newsdesk binary")
    }

    fn image(&self, name: &str) -> std::path::PathBuf {
        let path = self.home.path().join(name);
        fs::write(&path, b"\x89PNG fake image").unwrap();
        path
    }

    fn photos(&self) -> serde_json::Value {
        let output = self.run(&["photos", "list", "--format", "json"]);
        assert!(output.status.success(), "photos list should succeed");
        serde_json::from_slice(&output.stdout).expect("photos list should print JSON")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn capture(sandbox: &Sandbox, image: &Path) -> Output {
    sandbox.run(&["capture", "--image", image.to_str().unwrap()])
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = Sandbox::new().run(&["--help"]);

    assert!(output.status.success(), "Help should succeed");

    let stdout = stdout(&output);
    assert!(stdout.contains("newsdesk"), "Help should mention newsdesk");
    for cmd in ["feed", "photos", "capture", "live", "config"] {
        assert!(stdout.contains(cmd), "Help should list {} command", cmd);
    }
}

#[test]
fn test_version_command() {
    let output = Sandbox::new().run(&["--version"]);

    assert!(output.status.success(), "Version should succeed");
    assert!(stdout(&output).contains("newsdesk"));
}

#[test]
fn test_subcommand_help() {
    let sandbox = Sandbox::new();
    for cmd in ["feed", "photos", "capture", "live", "config"] {
        let output = sandbox.run(&[cmd, "--help"]);
        assert!(output.status.success(), "{} --help should succeed", cmd);
        assert!(!stdout(&output).is_empty(), "{} --help should produce output", cmd);
    }
}

// =============================================================================
// Feed
// =============================================================================

#[test]
fn test_feed_text() {
    let output = Sandbox::new().run(&["feed"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("[Politics] Breaking: Major Economic Summit Begins Today"));
    assert!(stdout.contains("8 hours ago"));
}

#[test]
fn test_feed_json() {
    let output = Sandbox::new().run(&["feed", "--format", "json"]);

    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1]["category"], "Technology");
}

// =============================================================================
// Capture and Photos
// =============================================================================

#[test]
fn test_photos_list_empty() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["photos", "list"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No captured photos"));
    assert_eq!(sandbox.photos(), serde_json::json!([]));
}

#[test]
fn test_capture_without_image_is_cancelled() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["capture"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Capture cancelled"));
    assert_eq!(sandbox.photos(), serde_json::json!([]));
}

#[test]
fn test_capture_tags_location_and_persists() {
    let sandbox = Sandbox::new();
    let output = capture(&sandbox, &sandbox.image("first.png"));

    assert!(output.status.success(), "capture failed: {}", stderr(&output));
    assert!(stdout(&output).contains("at 5th Ave, Metropolis, NY, USA"));
    assert!(stderr(&output).contains("Image captured and saved!"));

    let photos = sandbox.photos();
    let photos = photos.as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["city"], "Metropolis");
    assert_eq!(photos[0]["preciseLocation"], "5th Ave, Metropolis, NY, USA");
    assert!(photos[0]["uri"].as_str().unwrap().ends_with(".png"));
}

#[test]
fn test_location_denied_saves_untagged() {
    let sandbox = Sandbox::new();
    sandbox.write_config("feed_delay_ms = 0\n\n[permissions]\nlocation = false\n");

    let output = capture(&sandbox, &sandbox.image("shot.jpg"));

    assert!(output.status.success());
    assert!(stderr(&output).contains("Location will not be added to photos."));
    let photos = sandbox.photos();
    assert_eq!(photos[0]["city"], serde_json::Value::Null);
    assert_eq!(photos[0]["preciseLocation"], serde_json::Value::Null);
}

#[test]
fn test_camera_denied_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[permissions]\ncamera = false\n");

    let output = capture(&sandbox, &sandbox.image("shot.jpg"));

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Permission to access the camera is required!"));
    assert_eq!(sandbox.photos(), serde_json::json!([]));
}

#[test]
fn test_newest_first_show_and_dismiss() {
    let sandbox = Sandbox::new();
    assert!(capture(&sandbox, &sandbox.image("a.jpg")).status.success());
    assert!(capture(&sandbox, &sandbox.image("b.jpg")).status.success());

    let photos = sandbox.photos();
    let uris: Vec<String> = photos
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["uri"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(uris.len(), 2);

    let show = sandbox.run(&["photos", "show", &uris[0]]);
    assert!(show.status.success());
    assert!(stdout(&show).contains(&uris[0]));

    let dismiss = sandbox.run(&["photos", "dismiss", &uris[0]]);
    assert!(dismiss.status.success());

    let remaining = sandbox.photos();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["uri"], uris[1].as_str());

    let again = sandbox.run(&["photos", "dismiss", &uris[0]]);
    assert!(again.status.success(), "repeated dismiss should succeed");
    assert_eq!(sandbox.photos(), remaining);
}

#[test]
fn test_dismiss_unknown_uri_is_noop() {
    let sandbox = Sandbox::new();
    assert!(capture(&sandbox, &sandbox.image("e.jpg")).status.success());
    let before = sandbox.photos();

    let output = sandbox.run(&["photos", "dismiss", "file:///never-captured.jpg"]);

    assert!(output.status.success(), "dismiss failed: {}", stderr(&output));
    assert_eq!(sandbox.photos(), before);
}

#[test]
fn test_dismiss_on_empty_store_succeeds() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["photos", "dismiss", "file:///never-captured.jpg"]);

    assert!(output.status.success(), "dismiss failed: {}", stderr(&output));
    assert_eq!(sandbox.photos(), serde_json::json!([]));
}

#[test]
fn test_download_copies_into_gallery() {
    let sandbox = Sandbox::new();
    let gallery = sandbox.home.path().join("gallery");
    sandbox.write_config(&format!(
        "feed_delay_ms = 0\ngallery_dir = {:?}\n",
        gallery.to_str().unwrap()
    ));
    assert!(capture(&sandbox, &sandbox.image("c.jpg")).status.success());
    let uri = sandbox.photos()[0]["uri"].as_str().unwrap().to_string();

    let output = sandbox.run(&["photos", "download", &uri]);

    assert!(output.status.success(), "download failed: {}", stderr(&output));
    assert!(stderr(&output).contains("Image downloaded successfully to your gallery!"));
    assert_eq!(fs::read_dir(&gallery).unwrap().count(), 1);
    assert_eq!(sandbox.photos().as_array().unwrap().len(), 1);
}

#[test]
fn test_download_denied() {
    let sandbox = Sandbox::new();
    assert!(capture(&sandbox, &sandbox.image("d.jpg")).status.success());
    let uri = sandbox.photos()[0]["uri"].as_str().unwrap().to_string();
    sandbox.write_config("[permissions]\nmedia_library = false\n");

    let output = sandbox.run(&["photos", "download", &uri]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Permission to access media library is required"));
}

// =============================================================================
// Live and Config
// =============================================================================

#[test]
fn test_live_cancel() {
    let output = Sandbox::new().run(&["live", "cancel"]);
    assert!(output.status.success());
}

#[test]
fn test_live_rejects_unknown_option() {
    let output = Sandbox::new().run(&["live", "twitch"]);
    assert!(!output.status.success());
}

#[test]
fn test_live_camera_captures() {
    let sandbox = Sandbox::new();
    let image = sandbox.image("live.jpg");
    let output = sandbox.run(&["live", "camera", "--image", image.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(sandbox.photos().as_array().unwrap().len(), 1);
}

#[test]
fn test_config_path() {
    let output = Sandbox::new().run(&["config", "path"]);

    assert!(output.status.success(), "Config path should succeed");
    let stdout = stdout(&output);
    assert!(stdout.contains("newsdesk") && stdout.contains("config.toml"));
}

#[test]
fn test_config_show() {
    let output = Sandbox::new().run(&["config", "show"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("feed_delay_ms = 0"));
    assert!(stdout.contains("[permissions]"));
}

#[test]
fn test_config_init() {
    let sandbox = Sandbox::new();
    sandbox.remove_config();

    let output = sandbox.run(&["config", "init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created"));

    let again = sandbox.run(&["config", "init"]);
    assert!(again.status.success());
    assert!(stdout(&again).contains("already exists"));
}
