//! Hardware interface abstraction
//!
//! This module provides the [`MatrixInterface`] trait and the [`Interface`]
//! struct for driving an 8x8 LED matrix wired directly to 16 GPIO lines.
//!
//! ## Hardware Requirements
//!
//! The matrix is driven with no controller chip in between:
//! - 8 row lines, one per LED anode row (common-anode, driven high to light)
//! - 8 column lines, one per cathode column (common-cathode, pulled low to
//!   select)
//!
//! The position of each pin in the arrays handed to [`Interface::new`] is
//! the logical-index to physical-line mapping; it is fixed after
//! construction. In embedded-hal v1.0 a pin handed over as
//! [`OutputPin`] is already configured as an output, so there is no
//! separate direction setup.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use matrix_marquee::{Interface, MatrixInterface};
//! # use core::convert::Infallible;
//! # #[derive(Clone, Copy)]
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new([MockPin; 8], [MockPin; 8]);
//!
//! // Release every line
//! let _ = interface.blank();
//!
//! // Select column 3, then light rows 0 and 7 within it
//! let _ = interface.select_column(3);
//! let _ = interface.set_row(0, true);
//! let _ = interface.set_row(7, true);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Number of row lines and of column lines.
pub const MATRIX_SIZE: usize = 8;

/// Trait for the pin-driving capability under the marquee
///
/// This trait abstracts over different wirings, allowing the
/// [`Marquee`](crate::marquee::Marquee) to work with anything that can
/// drive 8 row lines and select one of 8 columns.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself when the matrix sits behind a shift register or port
/// expander instead of direct GPIO.
///
/// Implementations must uphold the multiplexing contract: after
/// [`select_column`](Self::select_column) returns, exactly the requested
/// column is active and the other seven are not.
pub trait MatrixInterface {
    /// Error type for pin operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Release every line: all rows dark, all columns deselected.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn blank(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Activate exactly column `col` (0 to 7) and deactivate the others.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn select_column(&mut self, col: u8) -> InterfaceResult<(), Self::Error>;

    /// Drive row line `row` (0 to 7) lit or dark within the selected
    /// column.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn set_row(&mut self, row: u8, lit: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Direct-GPIO interface for a 16-line 8x8 matrix
///
/// Implements [`MatrixInterface`] over embedded-hal v1.0 [`OutputPin`]
/// arrays.
///
/// ## Type Parameters
///
/// * `RP` - Row pin type implementing [`OutputPin`]
/// * `CP` - Column pin type implementing [`OutputPin`]
///
/// Rows default to active-high (common-anode) and columns to active-low
/// (common-cathode); both polarities are configurable for matrices wired
/// the other way around.
pub struct Interface<RP, CP> {
    /// Row drive pins, logical index 0 at the top
    rows: [RP; MATRIX_SIZE],
    /// Column drive pins, logical index 0 at the left
    cols: [CP; MATRIX_SIZE],
    /// Row polarity (true = lit when driven high)
    rows_active_high: bool,
    /// Column polarity (true = selected when driven low)
    cols_active_low: bool,
}

impl<RP, CP, PinErr> Interface<RP, CP>
where
    RP: OutputPin<Error = PinErr>,
    CP: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `rows` - 8 row pins, already configured as outputs
    /// * `cols` - 8 column pins, already configured as outputs
    ///
    /// The array order defines the logical-to-physical pin mapping.
    pub fn new(rows: [RP; MATRIX_SIZE], cols: [CP; MATRIX_SIZE]) -> Self {
        Self {
            rows,
            cols,
            rows_active_high: true,
            cols_active_low: true,
        }
    }

    /// Set row polarity
    ///
    /// Default is active-high (common-anode rows). Set to false for
    /// matrices with common-cathode rows.
    pub fn set_rows_active_high(&mut self, active_high: bool) -> &mut Self {
        self.rows_active_high = active_high;
        self
    }

    /// Get row polarity (true = lit when driven high)
    pub fn rows_active_high(&self) -> bool {
        self.rows_active_high
    }

    /// Set column polarity
    ///
    /// Default is active-low (common-cathode columns). Set to false for
    /// matrices with common-anode columns.
    pub fn set_cols_active_low(&mut self, active_low: bool) -> &mut Self {
        self.cols_active_low = active_low;
        self
    }

    /// Get column polarity (true = selected when driven low)
    pub fn cols_active_low(&self) -> bool {
        self.cols_active_low
    }

    fn drive<P: OutputPin<Error = PinErr>>(
        pin: &mut P,
        high: bool,
    ) -> InterfaceResult<(), InterfaceError<PinErr>> {
        if high {
            pin.set_high().map_err(InterfaceError::Pin)
        } else {
            pin.set_low().map_err(InterfaceError::Pin)
        }
    }
}

impl<RP, CP, PinErr> MatrixInterface for Interface<RP, CP>
where
    RP: OutputPin<Error = PinErr>,
    CP: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn blank(&mut self) -> InterfaceResult<(), Self::Error> {
        let row_idle = !self.rows_active_high;
        for pin in &mut self.rows {
            Self::drive(pin, row_idle)?;
        }
        let col_idle = self.cols_active_low;
        for pin in &mut self.cols {
            Self::drive(pin, col_idle)?;
        }
        Ok(())
    }

    fn select_column(&mut self, col: u8) -> InterfaceResult<(), Self::Error> {
        let active = !self.cols_active_low;
        for (i, pin) in self.cols.iter_mut().enumerate() {
            let selected = i == col as usize;
            Self::drive(pin, if selected { active } else { !active })?;
        }
        Ok(())
    }

    fn set_row(&mut self, row: u8, lit: bool) -> InterfaceResult<(), Self::Error> {
        if let Some(pin) = self.rows.get_mut(row as usize) {
            let level = lit == self.rows_active_high;
            Self::drive(pin, level)?;
        }
        Ok(())
    }
}
