//! ledplay - Text-art animation player for small LED matrices.
//!
//! This crate loads animations from a plain-text format (one character
//! per cell, frames separated by blank lines), packs each frame into a
//! 32-bit word matching the wiring of the attached display, and streams
//! the words to a device node at a fixed frame rate. A terminal preview
//! mode renders the same frames with ANSI escapes instead.
//!
//! # Architecture
//!
//! The crate is split into five modules:
//!
//! - `config`: Playback parameters and validation
//! - `frame`: The cell grid, the text format parser, and the frame store
//! - `encode`: Hardware bit layouts and frame-to-word packing
//! - `sink`: Output targets (device node, terminal preview)
//! - `player`: The fixed-rate playback loop and its stop token
//!
//! # Example
//!
//! ```rust,no_run
//! use ledplay::{FrameStore, PlaybackConfig, Player, PreviewSink};
//!
//! let config = PlaybackConfig {
//!     width: 4,
//!     height: 3,
//!     fps: 10,
//!     input: "walker.txt".into(),
//!     demo: true,
//! };
//! config.validate()?;
//!
//! let store = FrameStore::load(&config.input, config.width, config.height)?;
//! let player = Player::new(config);
//!
//! // Plays forever; set the stop handle from another thread to end it.
//! player.run(&store, &mut PreviewSink::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod encode;
pub mod frame;
pub mod player;
pub mod sink;

// Re-export commonly used types
pub use config::{ConfigError, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, PlaybackConfig};
pub use encode::{BitLayout, encode};
pub use frame::{Frame, FrameStore, LoadError, ParseDiagnostic};
pub use player::{PlaybackError, Player};
pub use sink::{DeviceSink, FrameSink, LED_DEVICE, PreviewSink};
