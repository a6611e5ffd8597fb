//! Output sinks for played frames.
//!
//! The player drives any [`FrameSink`]. The device sink packs each frame
//! through [`encode`] and writes the raw word; the preview sink draws
//! the grid with ANSI escapes instead. Tests capture either one through
//! a `Vec<u8>` writer.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

use crate::encode::encode;
use crate::frame::Frame;

/// Well-known device node the encoded words are streamed to.
pub const LED_DEVICE: &str = "/dev/led";

/// Clears the terminal and homes the cursor before a preview frame.
const CLEAR_HOME: &[u8] = b"\x1b[2J\x1b[2;1H";
/// Glyph for an on cell: bold green asterisk in parentheses.
const GLYPH_ON: &[u8] = b"\x1b[1;32m(*)\x1b[0m";
/// Glyph for an off cell.
const GLYPH_OFF: &[u8] = b"( )";

/// Destination that receives one frame per playback tick.
///
/// A failure is fatal to playback; the player does not retry.
pub trait FrameSink {
    /// Deliver one frame.
    fn emit(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Binary sink: one packed 32-bit word per frame, native byte order.
pub struct DeviceSink<W: Write> {
    dev: W,
}

impl DeviceSink<File> {
    /// Open a device node write-only. The node must already exist.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let dev = File::options().write(true).open(path)?;
        Ok(Self { dev })
    }
}

impl<W: Write> DeviceSink<W> {
    /// Wrap any writer.
    pub fn new(dev: W) -> Self {
        Self { dev }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.dev
    }
}

impl<W: Write> FrameSink for DeviceSink<W> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        let word = encode(frame);
        self.dev.write_all(&word.to_ne_bytes())?;
        self.dev.flush()
    }
}

/// Terminal preview sink: clears the screen and draws the grid at the
/// cadence the device would see.
pub struct PreviewSink<W: Write> {
    out: W,
}

impl PreviewSink<Stdout> {
    /// Preview on stdout.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PreviewSink<W> {
    /// Preview into any writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for PreviewSink<W> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.out.write_all(CLEAR_HOME)?;
        // Row height-1 is the top of the picture, row 0 the bottom; draw
        // top down so the terminal matches the authored file.
        for y in (0..frame.height()).rev() {
            self.out.write_all(b" ")?;
            for x in 0..frame.width() {
                self.out.write_all(if frame.get(x, y) { GLYPH_ON } else { GLYPH_OFF })?;
            }
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    #[test]
    fn test_device_sink_writes_native_endian_words() {
        let mut sink = DeviceSink::new(Vec::new());
        sink.emit(&Frame::from_cells(2, 1, vec![true, false])).unwrap();

        // 2 cells -> generic layout -> cell 0 is bit 0.
        assert_eq!(sink.into_inner(), 1u32.to_ne_bytes());
    }

    #[test]
    fn test_device_sink_writes_four_bytes_per_frame() {
        let mut sink = DeviceSink::new(Vec::new());
        let frame = Frame::blank(4, 3);
        sink.emit(&frame).unwrap();
        sink.emit(&frame).unwrap();
        assert_eq!(sink.into_inner().len(), 8);
    }

    #[test]
    fn test_preview_renders_single_cell_frame() {
        let mut sink = PreviewSink::new(Vec::new());
        sink.emit(&Frame::from_cells(1, 1, vec![true])).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "\x1b[2J\x1b[2;1H \x1b[1;32m(*)\x1b[0m\n\n");
    }

    #[test]
    fn test_preview_draws_top_row_first() {
        // Row 1 (top of picture) on, row 0 (bottom) off.
        let mut sink = PreviewSink::new(Vec::new());
        sink.emit(&Frame::from_cells(1, 2, vec![false, true])).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let body = text.strip_prefix("\x1b[2J\x1b[2;1H").unwrap();
        let rows: Vec<&str> = body.lines().collect();
        assert_eq!(rows[0], " \x1b[1;32m(*)\x1b[0m");
        assert_eq!(rows[1], " ( )");
    }

    #[test]
    fn test_preview_off_cells_are_plain_parentheses() {
        let mut sink = PreviewSink::new(Vec::new());
        sink.emit(&Frame::blank(3, 1)).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains(" ( )( )( )\n"));
        assert!(!text.contains('*'));
    }
}
