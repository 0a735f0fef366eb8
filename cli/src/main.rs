use crate::cli::Args;
use log::{debug, error, info};
use windowmanager_core::{Config, WMResult};

mod cli;
mod logger;

fn main() -> WMResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    info!("Starting WindowManager {}", windowmanager_core::version());

    if let Some(platform_name) = run(&args)? {
        debug!("Window controller initialized for {platform_name}");
    }

    Ok(())
}

/// Loads the configuration and initializes the window controller. Returns `None` for a dry run,
/// which stops after the config has been validated.
fn run(args: &Args) -> WMResult<Option<String>> {
    let config = if args.use_defaults {
        debug!("Using default configuration");
        Config::default()
    } else {
        Config::load(args.config_path.as_deref(), !args.dry_run).inspect_err(|e| {
            error!("{e}");
        })?
    };

    if let Some(path) = &config.config_path {
        debug!("Loaded config from {}", path.display());
    }

    if args.dry_run {
        info!("Configuration is valid");
        return Ok(None);
    }

    let platform_name = windowmanager_core::start_with_config(config, args.platform.as_deref())?;
    Ok(Some(platform_name))
}
