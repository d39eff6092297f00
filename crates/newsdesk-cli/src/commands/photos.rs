//! Photos command - list, inspect, dismiss and download captured photos.

use std::fmt::Write as _;

use anyhow::{Context as _, Result, bail};
use newsdesk_core::{DownloadOutcome, PhotoRecord};

use crate::cli::{OutputFormat, PhotosAction};
use crate::util::{Context, cancel_on_ctrl_c, print_notices};

/// Execute the photos command.
pub async fn cmd_photos(ctx: &Context, action: PhotosAction) -> Result<()> {
    let mut app = ctx.open_app(None)?;
    app.load_photos().await;
    let mut notices = app.subscribe();

    match action {
        PhotosAction::List { format } => {
            let content = match format {
                OutputFormat::Json => {
                    serde_json::to_string_pretty(app.photos())
                        .context("Failed to serialize photos")?
                        + "\n"
                }
                OutputFormat::Text => format_photos_text(app.photos()),
            };
            print!("{}", content);
        }
        PhotosAction::Show { uri } => {
            if !app.open_photo(&uri) {
                bail!("No captured photo with URI {}", uri);
            }
            if let Some(record) = app.viewer().selected() {
                print!("{}", format_record(record));
            }
        }
        PhotosAction::Dismiss { uri } => {
            app.dismiss(&uri)
                .await
                .into_result()
                .context("Photo removed from the list but the change was not saved")?;
            if !ctx.quiet {
                println!("Dismissed {}", uri);
            }
        }
        PhotosAction::Download { uri } => {
            if !app.open_photo(&uri) {
                bail!("No captured photo with URI {}", uri);
            }
            let outcome = app.download_selected(&cancel_on_ctrl_c()).await?;
            print_notices(&mut notices, ctx.quiet);
            match outcome {
                Some(DownloadOutcome::Saved) => {
                    if !ctx.quiet {
                        println!("Copied to {}", app.platform().gallery().dir().display());
                    }
                }
                None => {}
                Some(DownloadOutcome::PermissionDenied) => {
                    bail!("Media library permission denied")
                }
                Some(DownloadOutcome::Failed(reason)) => bail!("Download failed: {}", reason),
            }
        }
    }

    Ok(())
}

fn format_record(record: &PhotoRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URI:      {}", record.uri);
    let _ = writeln!(out, "City:     {}", record.city.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "Location: {}",
        record.precise_location.as_deref().unwrap_or("-")
    );
    out
}

/// Render photos as text, newest first.
pub fn format_photos_text(records: &[PhotoRecord]) -> String {
    if records.is_empty() {
        return "No captured photos. Run 'newsdesk capture --image <file>' to add one.\n"
            .to_string();
    }

    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        let place = record
            .city
            .as_deref()
            .or(record.precise_location.as_deref())
            .unwrap_or("no location");
        let _ = writeln!(out, "{:>3}. {} ({})", index + 1, record.uri, place);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_photos_text_empty() {
        assert!(format_photos_text(&[]).starts_with("No captured photos"));
    }

    #[test]
    fn test_format_photos_text() {
        let records = vec![
            PhotoRecord::new("b").with_location(Some("Metropolis".to_string()), None),
            PhotoRecord::new("a"),
        ];
        assert_eq!(
            format_photos_text(&records),
            "  1. b (Metropolis)\n  2. a (no location)\n"
        );
    }

    #[test]
    fn test_format_record() {
        let record = PhotoRecord::new("file:///p.jpg").with_location(
            Some("Metropolis".to_string()),
            Some("5th Ave, Metropolis, NY, USA".to_string()),
        );
        let text = format_record(&record);
        assert!(text.contains("City:     Metropolis"));
        assert!(text.contains("Location: 5th Ave, Metropolis, NY, USA"));
    }
}
