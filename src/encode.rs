//! Frame-to-word bit packing for the LED hardware.
//!
//! The packed word drives the board's register directly, so each logical
//! cell has a fixed destination bit determined by the wiring order. Two
//! boards are known: an 8-LED chain latching one LED per nibble, and a
//! 4x3 matrix whose data lines are interleaved with a strobe line. Any
//! other grid size falls back to an identity mapping, one bit per cell,
//! up to the 32 bits of the word.

use crate::frame::Frame;

/// Destination bit per logical cell on the 8-LED chain.
const CHAIN_8_BITS: [u32; 8] = [0, 4, 8, 12, 16, 20, 24, 28];

/// Destination bit per logical cell on the 4x3 matrix: eight data lines,
/// then three column drivers. Slot 11 is the strobe line, which playback
/// never drives.
const MATRIX_12_BITS: [Option<u32>; 12] = [
    Some(2),
    Some(5),
    Some(8),
    Some(11),
    Some(14),
    Some(17),
    Some(20),
    Some(23),
    Some(30),
    Some(28),
    Some(26),
    None, // strobe
];

/// Fixed mapping from logical cell index to bit position in the packed
/// output word, selected solely by a frame's cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitLayout {
    /// 8-cell chain: one LED per nibble, bits {0, 4, .., 28}.
    Chain8,
    /// 12-cell matrix: wiring-ordered data bits; cell 11 is the strobe
    /// slot and never reaches the word.
    Matrix12,
    /// Identity mapping, one bit per cell, for any other size up to 32.
    Generic,
}

impl BitLayout {
    /// Select the layout for a frame of `cells` cells.
    ///
    /// Only 8 and 12 have dedicated wiring tables; every other size
    /// falls back to [`BitLayout::Generic`].
    pub fn for_cell_count(cells: usize) -> Self {
        match cells {
            8 => BitLayout::Chain8,
            12 => BitLayout::Matrix12,
            _ => BitLayout::Generic,
        }
    }

    /// Destination bit for logical cell `cell`, or `None` when the cell
    /// has no bit in the word (the matrix strobe slot, or any cell past
    /// bit 31 under the generic mapping).
    pub fn dest_bit(self, cell: usize) -> Option<u32> {
        match self {
            BitLayout::Chain8 => CHAIN_8_BITS.get(cell).copied(),
            BitLayout::Matrix12 => MATRIX_12_BITS.get(cell).copied().flatten(),
            BitLayout::Generic => (cell < 32).then_some(cell as u32),
        }
    }
}

/// Pack a frame into the 32-bit hardware word.
///
/// Pure and total: every frame encodes to some word. Each on cell sets
/// its destination bit per the frame's [`BitLayout`]; all other bits
/// stay 0. Bit 0 is the least significant bit.
pub fn encode(frame: &Frame) -> u32 {
    let layout = BitLayout::for_cell_count(frame.cell_count());

    let mut word = 0u32;
    for (cell, &on) in frame.cells().iter().enumerate() {
        if on && let Some(bit) = layout.dest_bit(cell) {
            word |= 1 << bit;
        }
    }
    word
}
