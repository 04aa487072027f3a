//! Scroll state and frame composition
//!
//! Scrolling works on glyph pairs: the frame always shows the tail of the
//! current character and, shifted in from the left, the head of the next
//! one. [`ScrollState`] tracks which pair is visible (`index`) and how many
//! pixel columns the pair has slid (`offset`, 0 to 7). [`compose`] merges
//! the pair into one [`Frame`]; [`ScrollState::advance`] moves to the next
//! sub-character position.
//!
//! ## Example
//!
//! ```
//! use matrix_marquee::{Message, ScrollState, scroll};
//!
//! let message = match Message::new("AB ") {
//!     Ok(message) => message,
//!     Err(_) => return,
//! };
//! let mut state = ScrollState::new();
//! let frame = scroll::compose(&message, &state);
//! state.advance(message.len());
//! let _ = frame;
//! ```

use crate::config::Message;
use crate::font;
use crate::frame::Frame;

/// Pixel columns per glyph. Offsets wrap below this value.
pub const GLYPH_WIDTH: u8 = 8;

/// Current position within the scrolling message
///
/// `index` selects the character pair `(index, index + 1)`; `offset` is the
/// sub-character column shift. Starts at the beginning of the message and
/// wraps when the pair would run past the end, which is the scroll loop
/// point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the current character in the message
    index: usize,
    /// Sub-character column shift, 0 to 7
    offset: u8,
}

impl ScrollState {
    /// Create a state at the start of the message.
    pub const fn new() -> Self {
        Self {
            index: 0,
            offset: 0,
        }
    }

    /// Index of the current character.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sub-character column shift, 0 to 7.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Advance by one pixel column for a message of `glyph_count`
    /// characters.
    ///
    /// After [`GLYPH_WIDTH`] advances the offset returns to zero and the
    /// character index moves on. The index wraps to the start once it would
    /// reach `glyph_count - 1`, where no next glyph exists to pair with.
    pub fn advance(&mut self, glyph_count: usize) {
        self.offset += 1;
        if self.offset == GLYPH_WIDTH {
            self.offset = 0;
            self.index += 1;
            if self.index >= glyph_count.saturating_sub(1) {
                self.index = 0;
            }
        }
    }
}

/// Compose one frame from the message at the given scroll position
///
/// Each scan line is the current glyph's line shifted left by `offset`
/// columns, merged with the next glyph's line shifted in from the left:
///
/// ```text
/// line[r] = (cur[r] << offset) | (next[r] >> (8 - offset))
/// ```
///
/// At `offset == 0` the next glyph contributes nothing; that case is taken
/// separately because shifting a `u8` by 8 is not defined. Pure function:
/// the state advances only through [`ScrollState::advance`].
pub fn compose(message: &Message<'_>, state: &ScrollState) -> Frame {
    let bytes = message.bytes();
    // advance() keeps index below len - 1 for every reachable state.
    let index = state.index.min(bytes.len() - 2);
    let cur = font::glyph(bytes[index]);
    let next = font::glyph(bytes[index + 1]);

    let mut lines = [0u8; 8];
    for (r, line) in lines.iter_mut().enumerate() {
        *line = cur[r] << state.offset;
        if state.offset != 0 {
            *line |= next[r] >> (GLYPH_WIDTH - state.offset);
        }
    }
    Frame::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> Message<'_> {
        Message::new(text).unwrap()
    }

    #[test]
    fn test_compose_at_offset_zero_is_current_glyph_only() {
        // Regression test for the shift-by-8 case: the next glyph must not
        // leak into the frame at offset zero.
        let msg = message("A* ");
        let frame = compose(&msg, &ScrollState::new());
        assert_eq!(frame.lines(), &font::glyph(b'A'));
    }

    #[test]
    fn test_compose_blends_both_glyphs_mid_shift() {
        let msg = message("AB ");
        let mut state = ScrollState::new();
        for _ in 0..3 {
            state.advance(msg.len());
        }
        assert_eq!(state.offset(), 3);

        let a = font::glyph(b'A');
        let b = font::glyph(b'B');
        let frame = compose(&msg, &state);
        for r in 0..8 {
            assert_eq!(frame.line(r), (a[r] << 3) | (b[r] >> 5));
        }
    }

    #[test]
    fn test_offset_wraps_after_eight_advances() {
        let msg = message("ABC ");
        let mut state = ScrollState::new();
        for _ in 0..GLYPH_WIDTH {
            state.advance(msg.len());
        }
        assert_eq!(state.offset(), 0);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_index_wraps_before_final_pair() {
        // "AB ": pairs are (A,B) and (B,' '); index 2 would have no next
        // glyph, so the state wraps back to the start.
        let msg = message("AB ");
        let mut state = ScrollState::new();
        for _ in 0..(2 * GLYPH_WIDTH as usize) {
            state.advance(msg.len());
        }
        assert_eq!(state, ScrollState::new());
    }

    #[test]
    fn test_scroll_loop_is_seamless() {
        // After a full cycle through every reachable (index, offset) pair
        // the frame sequence repeats from the top.
        let msg = message("AB ");
        let mut state = ScrollState::new();
        let mut first_cycle = [Frame::new(); 16];
        for slot in &mut first_cycle {
            *slot = compose(&msg, &state);
            state.advance(msg.len());
        }
        for expected in &first_cycle {
            assert_eq!(compose(&msg, &state), *expected);
            state.advance(msg.len());
        }
    }

    #[test]
    fn test_two_character_message_scrolls() {
        let msg = message("A ");
        let mut state = ScrollState::new();
        for _ in 0..(3 * GLYPH_WIDTH as usize) {
            let _ = compose(&msg, &state);
            state.advance(msg.len());
            assert_eq!(state.index(), 0);
        }
    }
}
