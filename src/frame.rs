//! The in-flight frame buffer
//!
//! A [`Frame`] is the composite 8x8 bitmap about to be physically rendered:
//! 8 scan lines of 8 bits each. It is written by the composer
//! ([`compose`](crate::scroll::compose)) and read-only while the scanner
//! paints it. There is exactly one frame in flight per
//! [`Marquee`](crate::marquee::Marquee); no double-buffering.

/// An 8x8 composite bitmap, one byte per scan line.
///
/// Bit `b` of line `l` corresponds to the pixel the scanner drives on row
/// pin `b` while column `l` is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame([u8; 8]);

impl Frame {
    /// Create an all-dark frame.
    pub const fn new() -> Self {
        Self([0; 8])
    }

    /// Create a frame from raw scan lines.
    pub const fn from_lines(lines: [u8; 8]) -> Self {
        Self(lines)
    }

    /// Get one scan line.
    ///
    /// Out-of-range indices read as dark rather than panicking; the scanner
    /// only asks for lines 0 to 7.
    pub fn line(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Borrow all scan lines.
    pub fn lines(&self) -> &[u8; 8] {
        &self.0
    }

    /// Whether a single pixel is lit. `line` selects the scan line, `bit`
    /// the position within it.
    pub fn pixel(&self, line: usize, bit: usize) -> bool {
        bit < 8 && (self.line(line) >> bit) & 1 == 1
    }
}
