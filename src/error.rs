//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`ConfigError`]) and marquee operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`ConfigError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors while driving the matrix
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin
//!   driving errors
//!
//! ## Example
//!
//! ```
//! use matrix_marquee::{Builder, ConfigError, Message};
//!
//! // Missing message
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(ConfigError::MissingMessage)));
//!
//! // Too short for the composer's current/next glyph pair
//! let result = Message::new("A");
//! assert!(result.is_err());
//! ```

use crate::interface::MatrixInterface;

/// Minimum message length in characters
///
/// The composer always blends the current glyph with the next one, so a
/// message shorter than two characters has no valid scroll state.
pub const MIN_MESSAGE_LEN: usize = 2;

/// Errors that can occur while driving the matrix
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware
/// error.
#[derive(Debug)]
pub enum Error<I: MatrixInterface> {
    /// Pin driving error
    ///
    /// Wraps the underlying hardware error from the [`MatrixInterface`]
    /// implementation.
    Interface(I::Error),
}

impl<I: MatrixInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: MatrixInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the marquee is created; every value that
/// survives construction is safe for the composer's shift arithmetic.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A message was not specified
    ///
    /// [`Builder::message()`](crate::config::Builder::message) must be
    /// called before building.
    MissingMessage,
    /// The message is shorter than [`MIN_MESSAGE_LEN`] characters
    MessageTooShort {
        /// Length of the rejected message
        len: usize,
    },
    /// The message contains non-ASCII characters the font cannot index
    NonAsciiMessage,
    /// The frame repeat count was set to zero
    ZeroRepeat,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingMessage => write!(f, "A message must be specified"),
            Self::MessageTooShort { len } => write!(
                f,
                "Message of {len} characters is too short (minimum {MIN_MESSAGE_LEN})"
            ),
            Self::NonAsciiMessage => write!(f, "Message contains non-ASCII characters"),
            Self::ZeroRepeat => write!(f, "Frame repeat count must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}
