pub use common::*;
pub use window_controller::*;

mod common;
mod window_controller;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_os = "macos")] {
        pub const PLATFORM_NAME: &str = "macOS";
    } else if #[cfg(target_os = "windows")] {
        pub const PLATFORM_NAME: &str = "Windows";
    } else if #[cfg(unix)] {
        pub const PLATFORM_NAME: &str = "X11";
    } else {
        pub const PLATFORM_NAME: &str = "Unknown";
    }
}

/// Name of the platform this build targets.
pub fn current_platform_name() -> &'static str {
    PLATFORM_NAME
}
