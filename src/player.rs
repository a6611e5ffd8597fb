//! Fixed-rate playback loop.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::config::{ConfigError, PlaybackConfig};
use crate::frame::FrameStore;
use crate::sink::FrameSink;

/// Errors that stop playback.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no frames in input")]
    NoFrames,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write frame to sink: {0}")]
    Sink(#[from] io::Error),
}

/// Plays a frame store into a sink at the configured rate, looping the
/// animation until the stop token fires.
///
/// The stop token is shared: clone it via [`Player::stop_handle`] and set
/// it from a signal handler or another thread to end [`Player::run`]. The
/// loop checks the token before each frame, so setting it mid-sleep stops
/// playback after at most one frame interval.
///
/// # Example
///
/// ```no_run
/// use ledplay::config::PlaybackConfig;
/// use ledplay::frame::FrameStore;
/// use ledplay::player::Player;
/// use ledplay::sink::PreviewSink;
///
/// let config = PlaybackConfig {
///     width: 4,
///     height: 3,
///     fps: 10,
///     input: "walker.txt".into(),
///     demo: true,
/// };
/// let store = FrameStore::load(&config.input, config.width, config.height)?;
/// let player = Player::new(config);
/// player.run(&store, &mut PreviewSink::stdout())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Player {
    config: PlaybackConfig,
    stop: Arc<AtomicBool>,
}

impl Player {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Token that ends the playback loop when set to `true`.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run until the stop token fires or the sink fails.
    ///
    /// Frames are emitted in store order and the store is replayed from
    /// the start when exhausted. Returns the number of frames emitted.
    pub fn run<S: FrameSink>(
        &self,
        store: &FrameStore,
        sink: &mut S,
    ) -> Result<u64, PlaybackError> {
        self.config.validate()?;
        if store.is_empty() {
            return Err(PlaybackError::NoFrames);
        }

        info!("playing {} frames at {} fps", store.len(), self.config.fps);

        let delay = frame_delay(self.config.fps);
        let mut cursor = 0;
        let mut emitted = 0u64;
        loop {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            if cursor >= store.len() {
                cursor = 0;
            }
            sink.emit(&store[cursor])?;
            cursor += 1;
            emitted += 1;
            thread::sleep(delay);
        }
        Ok(emitted)
    }
}

/// Interval between frames: `1_000_000 / fps` whole microseconds.
fn frame_delay(fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps))
}
