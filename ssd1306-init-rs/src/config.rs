// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Driver configuration

use crate::command;

/// I²C fast mode clock rate in Hz
pub const FAST_MODE_FREQUENCY: u32 = 400_000;

/// Output polarity selected at the end of the initialization sequence
///
/// The vendor sequence this driver reproduces switches the panel to inverted
/// output, even though the surrounding steps describe a plain bring-up.
/// [`Polarity::Inverted`] is the default so that the emitted bytes match
/// that sequence exactly; choose [`Polarity::Normal`] to light pixels whose
/// RAM bit is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Send `INVERT_DISPLAY` (`0xA7`), as the vendor sequence does
    #[default]
    Inverted,

    /// Send `NORMAL_DISPLAY` (`0xA6`)
    Normal,
}

impl Polarity {
    /// Opcode selecting this polarity
    #[must_use]
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Inverted => command::INVERT_DISPLAY,
            Self::Normal => command::NORMAL_DISPLAY,
        }
    }
}

/// Driver configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bus clock rate applied before initialization, in Hz
    ///
    /// This is a bus-wide setting and affects every device on the bus.
    pub frequency: u32,

    /// Output polarity selected by the initialization sequence
    pub polarity: Polarity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency: FAST_MODE_FREQUENCY,
            polarity: Polarity::default(),
        }
    }
}

impl Config {
    /// Set the bus clock rate
    #[must_use]
    pub const fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the output polarity
    #[must_use]
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}
