use crate::platform::PlatformError;
use log::{debug, info};
use thiserror::Error;

pub mod config;
pub mod paths;
pub mod platform;

pub use config::{Config, ConfigError};
pub use platform::{log_initialize, WindowRect};

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

pub fn start_with_config(config: Config, platform_override: Option<&str>) -> WMResult<String> {
    Config::set_config(config);
    initialize(platform_override)
}

/// Resolves the platform name and announces the window controller for it. Returns the name that
/// was used.
pub fn initialize(platform_override: Option<&str>) -> WMResult<String> {
    let configured = Config::platform();
    let platform_name = platform::resolve_platform_name(platform_override, configured.as_deref())?;

    info!("Using platform {platform_name}");
    debug!("Default window bounds: {:?}", Config::default_window());

    log_initialize(&platform_name);
    Ok(platform_name)
}

#[derive(Debug, Error)]
pub enum WMFatalError {
    #[error("platform error: {0}")]
    PlatformError(#[from] PlatformError),
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type WMResult<T> = Result<T, WMFatalError>;
