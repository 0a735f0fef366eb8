use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "windowmanager",
    version = windowmanager_core::version(),
    about = "Window controller launcher",
)]
pub struct Args {
    /// Specify custom configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Validate configuration and exit without starting
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use default configuration and ignore config files
    #[arg(long = "defaults")]
    pub use_defaults: bool,

    /// Platform name to initialize instead of the detected one
    #[arg(short = 'p', long = "platform", value_name = "NAME")]
    pub platform: Option<String>,

    /// Only show info, warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show trace output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let args = Args::try_parse_from(["windowmanager"]).unwrap();
        assert_eq!(args.config_path, None);
        assert_eq!(args.platform, None);
        assert!(!args.dry_run && !args.use_defaults && !args.quiet && !args.verbose);
    }

    #[test]
    fn test_all_args() {
        let args = Args::try_parse_from([
            "windowmanager",
            "-c",
            "/tmp/config.yaml",
            "--dry-run",
            "--defaults",
            "-p",
            "Wayland",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("/tmp/config.yaml")));
        assert_eq!(args.platform.as_deref(), Some("Wayland"));
        assert!(args.dry_run && args.use_defaults && args.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["windowmanager", "-q", "-v"]).is_err());
    }
}
