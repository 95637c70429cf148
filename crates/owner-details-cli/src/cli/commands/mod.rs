//! CLI command handlers.

mod config_path;
mod show;

pub use config_path::run_config_path;
pub use show::run_show;
