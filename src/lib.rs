//! 8x8 LED Matrix Marquee Driver
//!
//! A driver for scrolling text across an 8x8 dot-matrix LED display wired
//! directly to 16 GPIO lines (8 row drivers, 8 column drivers), using
//! persistence-of-vision column multiplexing.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Built-in 8x8 bitmap font (A-Z plus a small symbol set)
//! - Smooth sub-character scrolling with seamless wraparound
//! - Clock-calibrated per-column hold time, independent of CPU speed
//! - Configurable row/column drive polarity
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use matrix_marquee::{Builder, Interface, Marquee, Message};
//!
//! # #[derive(Clone, Copy)]
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let row_pins = [MockPin; 8];
//! # let col_pins = [MockPin; 8];
//! # let mut delay = MockDelay;
//! let interface = Interface::new(row_pins, col_pins);
//! // Trailing space so the wraparound is seamless.
//! let message = match Message::new("HELLO WORLD ") {
//!     Ok(message) => message,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().message(message).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut marquee = Marquee::new(interface, config);
//! let _ = marquee.init();
//! loop {
//!     if marquee.step(&mut delay).is_err() {
//!         break;
//!     }
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Marquee configuration types and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// Built-in 8x8 bitmap font
pub mod font;
/// The in-flight frame buffer
pub mod frame;
/// Hardware interface abstraction
pub mod interface;
/// Core marquee driver
pub mod marquee;
/// Scroll state and frame composition
pub mod scroll;

pub use config::{Builder, Config, DEFAULT_HOLD_MICROS, DEFAULT_REPEAT, Message};
pub use error::{ConfigError, Error, MIN_MESSAGE_LEN};
pub use font::{BLANK, Glyph};
pub use frame::Frame;
pub use interface::{Interface, InterfaceError, MATRIX_SIZE, MatrixInterface};
pub use marquee::Marquee;
pub use scroll::{GLYPH_WIDTH, ScrollState, compose};
