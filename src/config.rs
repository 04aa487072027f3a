//! Marquee configuration types and builder

pub use crate::error::{ConfigError, MIN_MESSAGE_LEN};

/// Default number of times each frame is painted before the scroll advances.
///
/// Repetition stands in for brightness control: more repeats make the image
/// brighter and the scroll slower.
pub const DEFAULT_REPEAT: u8 = 5;

/// Default per-column hold time in microseconds.
///
/// At 200us per column a full pass takes 1.6ms, comfortably above the
/// roughly 60 passes/second needed for a flicker-free image.
pub const DEFAULT_HOLD_MICROS: u32 = 200;

/// A validated marquee message
///
/// The text must be ASCII (the built-in font is an ASCII font) and at least
/// [`MIN_MESSAGE_LEN`] characters long, because the composer always blends a
/// current and a next glyph. The message is immutable for its lifetime.
///
/// For a seamless wraparound the final character should render blank (a
/// trailing space). This is a documented precondition, not enforced: a
/// message without one simply shows a visible seam at the loop point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message<'a> {
    text: &'a str,
}

impl<'a> Message<'a> {
    /// Create a new message with validation
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MessageTooShort`] for texts under
    /// [`MIN_MESSAGE_LEN`] characters and [`ConfigError::NonAsciiMessage`]
    /// for texts containing non-ASCII characters.
    pub fn new(text: &'a str) -> Result<Self, ConfigError> {
        if !text.is_ascii() {
            return Err(ConfigError::NonAsciiMessage);
        }
        if text.len() < MIN_MESSAGE_LEN {
            return Err(ConfigError::MessageTooShort { len: text.len() });
        }
        Ok(Self { text })
    }

    /// The message text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The message as font-indexable bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Number of characters in the message. Always at least
    /// [`MIN_MESSAGE_LEN`].
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a valid message is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Marquee configuration
///
/// Holds the message and the two timing knobs of the scanner. Use
/// [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug)]
pub struct Config<'a> {
    /// The message to scroll
    pub message: Message<'a>,
    /// Times each frame is painted before the scroll advances
    pub repeat: u8,
    /// Per-column hold time in microseconds
    pub hold_micros: u32,
}

/// Builder for constructing marquee configuration
///
/// # Example
///
/// ```
/// use matrix_marquee::{Builder, Message};
///
/// let message = match Message::new("HELLO ") {
///     Ok(message) => message,
///     Err(_) => return,
/// };
/// let config = match Builder::new().message(message).repeat(3).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Debug, Default)]
pub struct Builder<'a> {
    /// The message to scroll (required)
    message: Option<Message<'a>>,
    /// Times each frame is painted, `None` for the default
    repeat: Option<u8>,
    /// Per-column hold in microseconds, `None` for the default
    hold_micros: Option<u32>,
}

impl<'a> Builder<'a> {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message to scroll (required)
    pub fn message(mut self, message: Message<'a>) -> Self {
        self.message = Some(message);
        self
    }

    /// Set how many times each frame is painted before the scroll advances
    ///
    /// Higher values are brighter and scroll slower. Default is
    /// [`DEFAULT_REPEAT`]. Zero is rejected at build time: a frame painted
    /// zero times never energizes the matrix.
    pub fn repeat(mut self, repeat: u8) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Set the per-column hold time in microseconds
    ///
    /// Too short starves the LEDs of visible brightness; too long drops the
    /// scan rate below the flicker-fusion threshold. Default is
    /// [`DEFAULT_HOLD_MICROS`].
    pub fn hold_micros(mut self, hold_micros: u32) -> Self {
        self.hold_micros = Some(hold_micros);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMessage`] if no message was set and
    /// [`ConfigError::ZeroRepeat`] if the repeat count was set to zero.
    pub fn build(self) -> Result<Config<'a>, ConfigError> {
        let repeat = self.repeat.unwrap_or(DEFAULT_REPEAT);
        if repeat == 0 {
            return Err(ConfigError::ZeroRepeat);
        }
        Ok(Config {
            message: self.message.ok_or(ConfigError::MissingMessage)?,
            repeat,
            hold_micros: self.hold_micros.unwrap_or(DEFAULT_HOLD_MICROS),
        })
    }
}
