//! Command implementations for the CLI.

mod capture;
mod config;
mod feed;
mod live;
mod photos;

pub use capture::cmd_capture;
pub use config::cmd_config;
pub use feed::cmd_feed;
pub use live::cmd_live;
pub use photos::cmd_photos;
