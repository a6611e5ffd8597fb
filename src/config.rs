//! Playback configuration and validation.

use std::path::PathBuf;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 4;
/// Default grid height in cells.
pub const DEFAULT_HEIGHT: usize = 3;
/// Default playback rate in frames per second.
pub const DEFAULT_FPS: u32 = 10;

/// Number of cells a packed output word can address.
pub const MAX_CELLS: usize = 32;

/// Top-level playback configuration.
///
/// Resolved from the command line before the core runs. `Player` treats
/// a validated config as a precondition and re-checks it on entry.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Grid width in cells (X dimension).
    pub width: usize,
    /// Grid height in cells (Y dimension).
    pub height: usize,
    /// Playback rate in frames per second.
    pub fps: u32,
    /// Path of the animation file to load.
    pub input: PathBuf,
    /// Render frames to the terminal instead of the LED device.
    pub demo: bool,
}

impl PlaybackConfig {
    /// Total cells per frame (width * height).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingInput);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.cell_count() > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells: self.cell_count(),
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no input file given")]
    MissingInput,
    #[error("grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("frame has {cells} cells but a packed word addresses at most {MAX_CELLS}")]
    TooManyCells { cells: usize },
    #[error("frames per second must be positive")]
    InvalidFrameRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> PlaybackConfig {
        PlaybackConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            input: "walker.txt".into(),
            demo: false,
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_input_path() {
        let config = PlaybackConfig {
            input: PathBuf::new(),
            ..base_config()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingInput)));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = PlaybackConfig {
            width: 0,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions)
        ));

        let config = PlaybackConfig {
            height: 0,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions)
        ));
    }

    #[test]
    fn test_rejects_grids_beyond_word_capacity() {
        let config = PlaybackConfig {
            width: 7,
            height: 5,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyCells { cells: 35 })
        ));
    }

    #[test]
    fn test_word_capacity_is_inclusive() {
        let config = PlaybackConfig {
            width: 8,
            height: 4,
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_fps() {
        let config = PlaybackConfig {
            fps: 0,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFrameRate)
        ));
    }
}
