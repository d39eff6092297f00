//! Capture command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};
use newsdesk_core::CaptureOutcome;

use crate::util::{Context, cancel_on_ctrl_c, print_notices};

/// Execute the capture command.
pub async fn cmd_capture(ctx: &Context, image: Option<PathBuf>) -> Result<()> {
    let mut app = ctx.open_app(image)?;
    app.load_photos().await;
    let mut notices = app.subscribe();

    let result = app.capture(&cancel_on_ctrl_c()).await;
    print_notices(&mut notices, ctx.quiet);

    report(ctx, &result?)
}

pub(crate) fn report(ctx: &Context, outcome: &CaptureOutcome) -> Result<()> {
    match outcome {
        CaptureOutcome::Saved { write, .. } if !write.is_persisted() => {
            bail!("Photo captured but could not be saved")
        }
        CaptureOutcome::CameraDenied => bail!("Camera permission denied"),
        CaptureOutcome::CameraFailed(reason) => bail!("Camera failed: {}", reason),
        _ => {
            if !ctx.quiet {
                println!("{}", describe_capture(outcome));
            }
            Ok(())
        }
    }
}

/// One-line summary of a capture attempt.
pub fn describe_capture(outcome: &CaptureOutcome) -> String {
    match outcome {
        CaptureOutcome::Saved { record, .. } => match &record.precise_location {
            Some(location) => format!("Saved {} at {}", record.uri, location),
            None => match &record.city {
                Some(city) => format!("Saved {} in {}", record.uri, city),
                None => format!("Saved {} without location", record.uri),
            },
        },
        CaptureOutcome::CameraDenied => "Camera permission denied".to_string(),
        CaptureOutcome::Cancelled => "Capture cancelled".to_string(),
        CaptureOutcome::CameraFailed(reason) => format!("Camera failed: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use newsdesk_core::{LocationLookup, PhotoRecord};
    use newsdesk_store::WriteThrough;

    use super::*;

    #[test]
    fn test_describe_capture() {
        let saved = CaptureOutcome::Saved {
            record: PhotoRecord::new("file:///p.jpg").with_location(
                Some("Metropolis".to_string()),
                Some("Metropolis, NY, USA".to_string()),
            ),
            location: LocationLookup::NoMatch,
            write: WriteThrough::Persisted,
        };
        assert_eq!(
            describe_capture(&saved),
            "Saved file:///p.jpg at Metropolis, NY, USA"
        );

        let untagged = CaptureOutcome::Saved {
            record: PhotoRecord::new("file:///q.jpg"),
            location: LocationLookup::PermissionDenied,
            write: WriteThrough::Persisted,
        };
        assert_eq!(
            describe_capture(&untagged),
            "Saved file:///q.jpg without location"
        );
        assert_eq!(describe_capture(&CaptureOutcome::Cancelled), "Capture cancelled");
    }
}
