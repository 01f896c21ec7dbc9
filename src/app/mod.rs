//! Application-level ambient concerns
//!
//! - Configuration handling
//! - Logging setup

pub mod config;
pub mod logging;

pub use config::{load_config, load_config_with, Config};
pub use logging::init_logging;
