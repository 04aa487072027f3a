//! Core marquee driver
//!
//! [`Marquee`] ties the composer and the column scanner together. Each
//! [`step`](Marquee::step) composes one frame from the current scroll
//! position, multiplexes it onto the matrix `repeat` times, then advances
//! the scroll by one pixel column. [`run`](Marquee::run) calls `step`
//! forever; hosts with their own scheduling (or a cancellation model) call
//! `step` themselves and simply stop between frames, so a scan is never
//! abandoned mid-column.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::frame::Frame;
use crate::interface::{MATRIX_SIZE, MatrixInterface};
use crate::scroll::{self, ScrollState};

type MarqueeResult<I> = core::result::Result<(), Error<I>>;

/// Scrolling-marquee driver for an 8x8 LED matrix
///
/// Owns the hardware interface, the configuration, the scroll state and the
/// single in-flight frame buffer. Exclusive ownership is what upholds the
/// single-writer contract on the pins: nothing else can touch them while
/// the marquee exists.
pub struct Marquee<'a, I>
where
    I: MatrixInterface,
{
    /// Hardware interface
    interface: I,
    /// Marquee configuration
    config: Config<'a>,
    /// Current scroll position
    scroll: ScrollState,
    /// The frame currently being painted
    frame: Frame,
}

impl<'a, I> Marquee<'a, I>
where
    I: MatrixInterface,
{
    /// Create a new Marquee instance
    pub fn new(interface: I, config: Config<'a>) -> Self {
        Self {
            interface,
            config,
            scroll: ScrollState::new(),
            frame: Frame::new(),
        }
    }

    /// Release every line and log the configuration
    ///
    /// Call once before the first [`step`](Marquee::step); the matrix stays
    /// dark until then.
    pub fn init(&mut self) -> MarqueeResult<I> {
        debug!(
            "marquee init: {} chars, repeat {}, hold {}us",
            self.config.message.len(),
            self.config.repeat,
            self.config.hold_micros,
        );
        self.interface.blank().map_err(Error::Interface)
    }

    /// Compose and paint one frame, then advance the scroll
    ///
    /// Paints the frame `repeat` times, holding each column for
    /// `hold_micros` on the provided clock. Returns between frames, which
    /// is the cooperative exit point for hosts that need to stop the
    /// scroll.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> MarqueeResult<I> {
        self.frame = scroll::compose(&self.config.message, &self.scroll);
        for _ in 0..self.config.repeat {
            self.paint_pass(delay)?;
        }
        self.scroll.advance(self.config.message.len());
        Ok(())
    }

    /// Run the marquee forever
    ///
    /// Only returns on a hardware error; termination is otherwise up to the
    /// host environment.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> MarqueeResult<I> {
        loop {
            self.step(delay)?;
        }
    }

    /// One full multiplexing pass over the matrix
    ///
    /// For each column: release every line, activate exactly that column,
    /// drive the rows whose bits are set in the frame's scan line, and hold.
    /// One column is active at any instant; persistence of vision merges
    /// the eight holds into a stable image.
    fn paint_pass<D: DelayNs>(&mut self, delay: &mut D) -> MarqueeResult<I> {
        let frame = self.frame;
        for col in 0..MATRIX_SIZE {
            self.interface.blank().map_err(Error::Interface)?;
            self.interface
                .select_column(col as u8)
                .map_err(Error::Interface)?;
            let line = frame.line(col);
            for row in 0..MATRIX_SIZE {
                if (line >> row) & 1 == 1 {
                    self.interface
                        .set_row(row as u8, true)
                        .map_err(Error::Interface)?;
                }
            }
            delay.delay_us(self.config.hold_micros);
        }
        Ok(())
    }

    /// The frame most recently composed.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The current scroll position.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Access the underlying configuration.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Blank the matrix and give the interface back.
    ///
    /// The matrix is left dark even if the blanking write fails.
    pub fn release(mut self) -> I {
        let _ = self.interface.blank();
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Message};
    use crate::font;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Event {
        Blank,
        Select(u8),
        Row(u8),
    }

    #[derive(Debug)]
    struct MockInterface {
        events: alloc::vec::Vec<Event>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                events: alloc::vec::Vec::new(),
            }
        }
    }

    impl MatrixInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn blank(&mut self) -> Result<(), Self::Error> {
            self.events.push(Event::Blank);
            Ok(())
        }

        fn select_column(&mut self, col: u8) -> Result<(), Self::Error> {
            self.events.push(Event::Select(col));
            Ok(())
        }

        fn set_row(&mut self, row: u8, lit: bool) -> Result<(), Self::Error> {
            assert!(lit, "the scanner only drives lit rows after a blank");
            self.events.push(Event::Row(row));
            Ok(())
        }
    }

    struct MockDelay {
        holds: alloc::vec::Vec<u32>,
    }

    impl MockDelay {
        fn new() -> Self {
            Self {
                holds: alloc::vec::Vec::new(),
            }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.holds.push(ns / 1_000);
        }
    }

    fn test_marquee(text: &str, repeat: u8) -> Marquee<'_, MockInterface> {
        let config = Builder::new()
            .message(Message::new(text).unwrap())
            .repeat(repeat)
            .build()
            .unwrap();
        Marquee::new(MockInterface::new(), config)
    }

    #[test]
    fn test_init_blanks_the_matrix() {
        let mut marquee = test_marquee("AB ", 1);
        marquee.init().unwrap();
        assert_eq!(marquee.interface.events, &[Event::Blank]);
    }

    #[test]
    fn test_step_advances_scroll_by_one_column() {
        let mut marquee = test_marquee("AB ", 2);
        let mut delay = MockDelay::new();
        marquee.step(&mut delay).unwrap();
        assert_eq!(marquee.scroll().offset(), 1);
        assert_eq!(marquee.scroll().index(), 0);
    }

    #[test]
    fn test_step_scans_each_column_repeat_times() {
        let mut marquee = test_marquee("AB ", 3);
        let mut delay = MockDelay::new();
        marquee.step(&mut delay).unwrap();

        let selects: alloc::vec::Vec<u8> = marquee
            .interface
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Select(col) => Some(*col),
                _ => None,
            })
            .collect();
        let expected: alloc::vec::Vec<u8> =
            core::iter::repeat_n(0u8..8, 3).flatten().collect();
        assert_eq!(selects, expected);
    }

    #[test]
    fn test_exactly_one_column_active_at_any_instant() {
        let mut marquee = test_marquee("HELLO ", 2);
        let mut delay = MockDelay::new();
        marquee.step(&mut delay).unwrap();

        // Replay the event log against a model of the column lines; the
        // hold at the end of each column segment samples the state.
        let mut active: Option<u8> = None;
        let mut sampled = 0usize;
        for event in &marquee.interface.events {
            match event {
                Event::Blank => {
                    if let Some(col) = active.take() {
                        // A column was lit right up to the blank.
                        assert!(col < 8);
                        sampled += 1;
                    }
                }
                Event::Select(col) => {
                    assert!(active.is_none(), "two columns active at once");
                    active = Some(*col);
                }
                Event::Row(_) => {
                    assert!(active.is_some(), "row driven with no column selected");
                }
            }
        }
        // 8 columns x repeat 2, minus the final segment that stays lit
        // until the next step blanks it.
        assert_eq!(sampled, 15);
        assert!(active.is_some());
    }

    #[test]
    fn test_step_drives_rows_from_frame_lines() {
        // At offset 0 the frame is exactly the first glyph, so the rows
        // driven during column c must match the set bits of line c.
        let mut marquee = test_marquee("A* ", 1);
        let mut delay = MockDelay::new();
        marquee.step(&mut delay).unwrap();

        let glyph = font::glyph(b'A');
        let mut column: Option<u8> = None;
        for event in &marquee.interface.events {
            match event {
                Event::Blank => column = None,
                Event::Select(col) => column = Some(*col),
                Event::Row(row) => {
                    let col = column.unwrap();
                    assert_eq!((glyph[col as usize] >> row) & 1, 1);
                }
            }
        }
    }

    #[test]
    fn test_step_holds_each_column_for_configured_time() {
        let config = Builder::new()
            .message(Message::new("AB ").unwrap())
            .repeat(2)
            .hold_micros(150)
            .build()
            .unwrap();
        let mut marquee = Marquee::new(MockInterface::new(), config);
        let mut delay = MockDelay::new();
        marquee.step(&mut delay).unwrap();
        assert_eq!(delay.holds.len(), 16);
        assert!(delay.holds.iter().all(|&us| us == 150));
    }

    #[test]
    fn test_eight_steps_move_to_next_character() {
        let mut marquee = test_marquee("ABC ", 1);
        let mut delay = MockDelay::new();
        for _ in 0..8 {
            marquee.step(&mut delay).unwrap();
        }
        assert_eq!(marquee.scroll().index(), 1);
        assert_eq!(marquee.scroll().offset(), 0);
    }

    #[test]
    fn test_interface_errors_propagate() {
        #[derive(Debug)]
        struct BrokenInterface;

        impl MatrixInterface for BrokenInterface {
            type Error = &'static str;

            fn blank(&mut self) -> Result<(), Self::Error> {
                Err("gpio fault")
            }

            fn select_column(&mut self, _col: u8) -> Result<(), Self::Error> {
                Err("gpio fault")
            }

            fn set_row(&mut self, _row: u8, _lit: bool) -> Result<(), Self::Error> {
                Err("gpio fault")
            }
        }

        let config = Builder::new()
            .message(Message::new("AB ").unwrap())
            .build()
            .unwrap();
        let mut marquee = Marquee::new(BrokenInterface, config);
        let mut delay = MockDelay::new();
        assert!(matches!(
            marquee.step(&mut delay),
            Err(Error::Interface("gpio fault"))
        ));
    }

    #[test]
    fn test_release_blanks_and_returns_interface() {
        let mut marquee = test_marquee("AB ", 1);
        marquee.init().unwrap();
        let interface = marquee.release();
        assert_eq!(interface.events.last(), Some(&Event::Blank));
    }
}
