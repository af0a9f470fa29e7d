// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Bring-up driver for SSD1306 OLED controllers over I²C
//!
//! The crate does two things: it sends arbitrary command sequences to the
//! controller, and it emits the vendor initialization sequence that takes a
//! controller from reset to an active, displaying state.
//!
//! ```ignore
//! use ssd1306_init_rs::{Display, FixedClock, DEFAULT_ADDRESS};
//!
//! let mut display = Display::new(FixedClock::new(i2c));
//! display.initialize(DEFAULT_ADDRESS, 128, 64)?;
//! ```
//!
//! Drawing, framebuffers and scrolling are left to other crates.

#![no_std]

#[cfg(feature = "async")]
mod r#async;
#[cfg(feature = "async")]
pub use self::r#async::Display as AsyncDisplay;

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "blocking")]
pub use self::blocking::Display;

pub mod command;
pub use self::command::ALTERNATE_ADDRESS;
pub use self::command::DEFAULT_ADDRESS;

mod clock;
pub use self::clock::ClockControl;
pub use self::clock::FixedClock;

mod config;
pub use self::config::Config;
pub use self::config::Polarity;
pub use self::config::FAST_MODE_FREQUENCY;

mod error;
pub use self::error::Error;

mod sequence;
pub use self::sequence::multiplex_ratio;
pub use self::sequence::CommandGroup;
pub use self::sequence::InitSequence;
pub use self::sequence::GROUP_COUNT;

#[cfg(test)]
mod mock;
