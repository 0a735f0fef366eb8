use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform name must not be empty")]
    EmptyPlatformName,
    #[error("failed to write to output: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Position and size of a window. Fields are stored exactly as given, so negative sizes are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<(i32, i32, i32, i32)> for WindowRect {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip() {
        let rect = WindowRect::new(10, 20, 640, 480);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.width, 640);
        assert_eq!(rect.height, 480);
    }

    #[test]
    fn test_negative_and_extreme_values() {
        let rect = WindowRect {
            x: i32::MIN,
            y: -1,
            width: -300,
            height: i32::MAX,
        };
        assert_eq!(rect.x, i32::MIN);
        assert_eq!(rect.y, -1);
        assert_eq!(rect.width, -300);
        assert_eq!(rect.height, i32::MAX);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(
            WindowRect::from((1, 2, 3, 4)),
            WindowRect {
                x: 1,
                y: 2,
                width: 3,
                height: 4,
            }
        );
    }

    #[test]
    fn test_default_is_zeroed() {
        assert_eq!(WindowRect::default(), WindowRect::new(0, 0, 0, 0));
    }

    #[test]
    fn test_yaml_fields() {
        let rect: WindowRect =
            serde_yaml::from_str("x: -5\ny: 15\nwidth: 1920\nheight: 1080\n").unwrap();
        assert_eq!(rect, WindowRect::new(-5, 15, 1920, 1080));
    }
}
