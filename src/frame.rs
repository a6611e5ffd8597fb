//! Frame storage and the animation file loader.
//!
//! Animation files are plain text: each frame is `height` lines of cell
//! characters followed by one blank separator line, repeated until end
//! of input. `x`/`X` is an on cell, `.` an off cell; anything else at a
//! valid column is reported and left off. Input is consumed as raw
//! bytes and does not have to be valid UTF-8; a stray byte is just
//! another reported character. The first line of a block is the top of
//! the picture but is stored at the highest row index, so row 0 is the
//! hardware's bottom row.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::Index;
use std::path::Path;

use log::{debug, warn};

/// One on/off grid snapshot of the animation.
///
/// Cells are stored flat, indexed `y * width + x`, with row 0 at the
/// bottom of the picture (see [`Frame::idx`]). Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Frame {
    /// Create a frame from a flat cell vector.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cell count must equal width * height"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create an all-off frame.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Convert (x, y) to the flat cell index: `y * width + x`.
    ///
    /// Row `y = 0` is the bottom row of the picture. The loader fills
    /// rows from the top of a block down into indices `height - 1`
    /// through 0, which is the order the hardware is wired in.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether the cell at (x, y) is on.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        let i = self.idx(x, y);
        self.cells[i] = on;
    }
}

/// Non-fatal loader diagnostic: a grid position that could not be read
/// as a cell. The cell stays off and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based source line, counting every read attempt including
    /// separator lines.
    pub line: usize,
    /// 0-based byte column within the frame row.
    pub column: usize,
    /// The offending byte, or `None` when the line ended before this
    /// column.
    pub found: Option<u8>,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            // escape_ascii keeps printable bytes as-is and renders the
            // rest as \xNN, so the report stays valid UTF-8.
            Some(b) => write!(
                f,
                "line {}:{}: unknown character '{}'",
                self.line,
                self.column,
                b.escape_ascii()
            ),
            None => write!(f, "line {}:{}: line ends before frame width", self.line, self.column),
        }
    }
}

/// Errors from loading an animation file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The source contained no frame blocks at all.
    #[error("no frames in input")]
    NoFrames,
}

/// The decoded animation: an ordered sequence of uniformly sized frames,
/// plus whatever the loader had to report along the way.
#[derive(Debug, Clone)]
pub struct FrameStore {
    width: usize,
    height: usize,
    frames: Vec<Frame>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl FrameStore {
    /// Load an animation from a file.
    ///
    /// Fails if the file cannot be opened or read, or if it contains no
    /// frame blocks. Stray characters never fail the load; they are
    /// logged through [`log::warn!`] and kept on the store.
    pub fn load<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let store = Self::read_from(BufReader::new(file), width, height)?;

        for diag in store.diagnostics() {
            warn!("{}", diag);
        }
        debug!("{} frames loaded from {}", store.len(), path.display());

        Ok(store)
    }

    /// Parse animation text from any buffered reader.
    ///
    /// The input is read as raw bytes, so a file that is not valid
    /// UTF-8 still loads; every byte that is not a cell character is a
    /// diagnostic, never a read error.
    ///
    /// A frame is appended once its block's `height` content-line reads
    /// consumed at least one byte; the blank separator after a block is
    /// optional at end of input. A clean end of input before a block
    /// produced anything discards the in-progress frame, so a file
    /// ending right after its final separator does not grow a spurious
    /// all-off frame.
    pub fn read_from<R: BufRead>(
        mut reader: R,
        width: usize,
        height: usize,
    ) -> Result<Self, LoadError> {
        let mut frames = Vec::new();
        let mut diagnostics = Vec::new();
        let mut line_no = 0usize;
        let mut buf = Vec::new();

        loop {
            let mut frame = Frame::blank(width, height);
            let diag_mark = diagnostics.len();
            let mut block_bytes = 0usize;

            // `height` content lines, stored bottom-up: the first line
            // of a block is the top of the picture.
            for y in (0..height).rev() {
                buf.clear();
                block_bytes += reader.read_until(b'\n', &mut buf)?;
                line_no += 1;
                parse_row(&buf, width, line_no, y, &mut frame, &mut diagnostics);
            }

            if block_bytes == 0 {
                // End of input with no data for this block: discard the
                // in-progress frame and anything it reported.
                diagnostics.truncate(diag_mark);
                break;
            }
            frames.push(frame);

            // Separator line; missing at end of input is fine.
            buf.clear();
            reader.read_until(b'\n', &mut buf)?;
            line_no += 1;
        }

        if frames.is_empty() {
            return Err(LoadError::NoFrames);
        }

        Ok(Self {
            width,
            height,
            frames,
            diagnostics,
        })
    }

    /// Build a store from frames constructed elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if any frame's dimensions differ from `width`/`height`.
    pub fn from_frames(width: usize, height: usize, frames: Vec<Frame>) -> Self {
        for frame in &frames {
            assert_eq!(
                (frame.width(), frame.height()),
                (width, height),
                "all frames must share the store dimensions"
            );
        }
        Self {
            width,
            height,
            frames,
            diagnostics: Vec::new(),
        }
    }

    /// Grid width shared by every frame.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height shared by every frame.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the store holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Diagnostics collected while loading.
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }
}

impl Index<usize> for FrameStore {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.frames[index]
    }
}

/// Parse one source line into frame row `y`.
///
/// Bytes beyond `width` are ignored; the format only promises "at
/// least `width`" characters per line.
fn parse_row(
    line: &[u8],
    width: usize,
    line_no: usize,
    y: usize,
    frame: &mut Frame,
    diagnostics: &mut Vec<ParseDiagnostic>,
) {
    let content = line.strip_suffix(b"\n").unwrap_or(line);
    let content = content.strip_suffix(b"\r").unwrap_or(content);

    let mut bytes = content.iter().copied();
    for x in 0..width {
        match bytes.next() {
            Some(b'x') | Some(b'X') => frame.set(x, y, true),
            Some(b'.') => {}
            Some(b) => diagnostics.push(ParseDiagnostic {
                line: line_no,
                column: x,
                found: Some(b),
            }),
            None => diagnostics.push(ParseDiagnostic {
                line: line_no,
                column: x,
                found: None,
            }),
        }
    }
}
