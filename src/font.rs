//! Built-in 8x8 marquee font
//!
//! This module holds the bitmap font used by the scroller. Each glyph is
//! eight row bitmasks; bit *c* of row *r* lights the pixel in column *c*.
//! Glyphs are drawn 7 pixels wide with a blank eighth column and a blank
//! eighth row, so adjacent characters stay separated while scrolling.
//!
//! ## Lookup
//!
//! [`glyph`] is total: letters resolve case-insensitively, a fixed set of
//! punctuation and symbol characters resolve to their bitmaps, and anything
//! else resolves to [`BLANK`]. Lookup is a pure function over a static
//! table; repeated calls with the same input always return the same glyph.
//!
//! ## Example
//!
//! ```
//! use matrix_marquee::font::{glyph, BLANK};
//!
//! assert_eq!(glyph(b'a'), glyph(b'A'));
//! assert_eq!(glyph(b'~'), BLANK);
//! ```

/// One character bitmap: 8 row bitmasks, bit `c` set lights column `c`.
pub type Glyph = [u8; 8];

/// The blank glyph. Also the fallback for unmapped characters.
pub const BLANK: Glyph = [0x00; 8];

const A: Glyph = [0x08, 0x14, 0x22, 0x41, 0x7F, 0x41, 0x41, 0x00];
const B: Glyph = [0x7E, 0x21, 0x21, 0x3E, 0x21, 0x21, 0x7E, 0x00];
const C: Glyph = [0x1F, 0x20, 0x40, 0x40, 0x40, 0x20, 0x1F, 0x00];
const D: Glyph = [0x7C, 0x22, 0x21, 0x21, 0x21, 0x22, 0x7C, 0x00];
const E: Glyph = [0x7F, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x7F, 0x00];
const F: Glyph = [0x7F, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00];
const G: Glyph = [0x1F, 0x20, 0x40, 0x4F, 0x41, 0x21, 0x1F, 0x00];
const H: Glyph = [0x41, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x41, 0x00];
const I: Glyph = [0x7F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x7F, 0x00];
const J: Glyph = [0x0F, 0x01, 0x01, 0x01, 0x01, 0x41, 0x3E, 0x00];
const K: Glyph = [0x43, 0x44, 0x48, 0x70, 0x48, 0x44, 0x43, 0x00];
const L: Glyph = [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7F, 0x00];
const M: Glyph = [0x76, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x00];
const N: Glyph = [0x41, 0x61, 0x51, 0x49, 0x45, 0x43, 0x41, 0x00];
const O: Glyph = [0x1C, 0x22, 0x41, 0x49, 0x41, 0x22, 0x1C, 0x00];
const P: Glyph = [0x7E, 0x21, 0x21, 0x3E, 0x20, 0x20, 0x20, 0x00];
const Q: Glyph = [0x1C, 0x22, 0x41, 0x41, 0x45, 0x22, 0x1D, 0x00];
const R: Glyph = [0x7E, 0x21, 0x21, 0x2E, 0x24, 0x22, 0x21, 0x00];
const S: Glyph = [0x3F, 0x40, 0x40, 0x3E, 0x01, 0x01, 0x7E, 0x00];
const T: Glyph = [0x7F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00];
const U: Glyph = [0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3E, 0x00];
const V: Glyph = [0x41, 0x41, 0x41, 0x41, 0x22, 0x14, 0x08, 0x00];
const W: Glyph = [0x41, 0x49, 0x49, 0x49, 0x49, 0x49, 0x36, 0x00];
const X: Glyph = [0x41, 0x22, 0x14, 0x08, 0x14, 0x22, 0x41, 0x00];
const Y: Glyph = [0x41, 0x22, 0x14, 0x08, 0x08, 0x08, 0x08, 0x00];
const Z: Glyph = [0x7F, 0x02, 0x04, 0x3E, 0x10, 0x20, 0x7F, 0x00];
const COLON: Glyph = [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00];
const DASH: Glyph = [0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00];
const PAREN: Glyph = [0x10, 0x08, 0x04, 0x04, 0x08, 0x10, 0x00, 0x00];
const BAR: Glyph = [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00];
const DOT: Glyph = [0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00];
const SMILE: Glyph = [0x00, 0x64, 0x62, 0x19, 0x62, 0x64, 0x00, 0x00];
const THREE: Glyph = [0x3E, 0x01, 0x01, 0x0F, 0x01, 0x41, 0x3E, 0x00];
const HEART: Glyph = [0x03, 0x1F, 0x3F, 0x7E, 0x7F, 0x1F, 0x03, 0x00];
const COLDOT: Glyph = [0x00, 0x30, 0x30, 0x00, 0x33, 0x33, 0x00, 0x00];
const SOLID: Glyph = [0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x00];
const CHECKER: Glyph = [0x55, 0x2A, 0x55, 0x2A, 0x55, 0x2A, 0x55, 0x00];

/// Look up the glyph for an ASCII byte.
///
/// Letters are case-insensitive. Space and `_` both render blank. The
/// symbol set covers `:`, `-`, `)`, `|`, `.`, `%` (smiley), `3`, `<`
/// (heart, for `<3`), `^` (double colon-dot), `*` (solid block) and `#`
/// (checkerboard). Any other byte falls back to [`BLANK`].
pub fn glyph(ch: u8) -> Glyph {
    match ch.to_ascii_uppercase() {
        b'A' => A,
        b'B' => B,
        b'C' => C,
        b'D' => D,
        b'E' => E,
        b'F' => F,
        b'G' => G,
        b'H' => H,
        b'I' => I,
        b'J' => J,
        b'K' => K,
        b'L' => L,
        b'M' => M,
        b'N' => N,
        b'O' => O,
        b'P' => P,
        b'Q' => Q,
        b'R' => R,
        b'S' => S,
        b'T' => T,
        b'U' => U,
        b'V' => V,
        b'W' => W,
        b'X' => X,
        b'Y' => Y,
        b'Z' => Z,
        b':' => COLON,
        b'-' => DASH,
        b')' => PAREN,
        b'|' => BAR,
        b'.' => DOT,
        b'%' => SMILE,
        b'3' => THREE,
        b'<' => HEART,
        b'^' => COLDOT,
        b'*' => SOLID,
        b'#' => CHECKER,
        _ => BLANK,
    }
}
