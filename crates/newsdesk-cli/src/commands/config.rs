//! Config command implementation.

use anyhow::{Context as _, Result};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::util::Context;

/// Execute the config command.
pub fn cmd_config(ctx: &Context, action: ConfigAction) -> Result<()> {
    let path = Config::path();

    match action {
        ConfigAction::Show => {
            let content =
                toml::to_string_pretty(&ctx.config).context("Failed to serialize config")?;
            println!("# {}", path.display());
            println!("# data directory: {}", ctx.data_dir.display());
            print!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save()?;
                println!("Created {}", path.display());
            }
        }
    }

    Ok(())
}
