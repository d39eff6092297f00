//! Live command - the go-live action sheet.

use std::path::PathBuf;

use anyhow::Result;
use newsdesk_core::{GoLiveOption, LiveOutcome};

use super::capture::report;
use crate::util::{Context, cancel_on_ctrl_c, print_notices};

/// Execute the live command.
pub async fn cmd_live(ctx: &Context, option: GoLiveOption, image: Option<PathBuf>) -> Result<()> {
    let mut app = ctx.open_app(image)?;
    if option == GoLiveOption::OpenCamera {
        app.load_photos().await;
    }
    let mut notices = app.subscribe();

    let result = app.go_live(option, &cancel_on_ctrl_c()).await;
    print_notices(&mut notices, ctx.quiet);

    match result? {
        LiveOutcome::Dismissed => {}
        LiveOutcome::YouTube { opened } => {
            if opened && !ctx.quiet {
                println!("Opened {}", newsdesk_core::YOUTUBE_URL);
            }
        }
        LiveOutcome::Capture(outcome) => report(ctx, &outcome)?,
    }
    Ok(())
}
