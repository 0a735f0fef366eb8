use crate::platform::{PlatformError, PlatformResult};
use log::warn;
use std::io::{self, Write};

pub const INITIALIZE_PREFIX: &str = "Initializing window controller for platform: ";

/// Writes the initialization line for `platform_name` to stdout. The name is not validated and
/// write failures are ignored. Emits no log record, so the line is the only output.
pub fn log_initialize(platform_name: &str) {
    let stdout = io::stdout();
    let _ = write_initialize(&mut stdout.lock(), platform_name);
}

/// Writes the initialization line for `platform_name` to `out` as a single line.
pub fn write_initialize<W: Write>(out: &mut W, platform_name: &str) -> PlatformResult<()> {
    writeln!(out, "{INITIALIZE_PREFIX}{platform_name}")?;
    out.flush()?;
    Ok(())
}

/// Picks the platform name to initialize with. An explicit override wins, then the configured
/// name, then the name compiled in for this target.
pub fn resolve_platform_name(
    platform_override: Option<&str>,
    configured: Option<&str>,
) -> PlatformResult<String> {
    if let Some(name) = platform_override {
        if name.trim().is_empty() {
            return Err(PlatformError::EmptyPlatformName);
        }
        return Ok(name.to_owned());
    }

    match configured {
        Some(name) if !name.trim().is_empty() => Ok(name.to_owned()),
        Some(_) => {
            warn!("Ignoring empty platform name in config");
            Ok(super::current_platform_name().to_owned())
        }
        None => Ok(super::current_platform_name().to_owned()),
    }
}
