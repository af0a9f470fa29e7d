// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Async display

use log::debug;
use log::log_enabled;
use log::trace;
use log::warn;
use log::Level::Trace;

use embedded_hal_async::i2c::I2c;
use embedded_hal_async::i2c::Operation;

use crate::command;
use crate::ClockControl;
use crate::Config;
use crate::Error;
use crate::InitSequence;

/// An SSD1306 OLED controller on an async I²C bus
pub struct Display<I2C> {
    /// I²C bus
    i2c: I2C,

    /// Configuration
    config: Config,
}

impl<I2C> Display<I2C>
where
    I2C: I2c,
{
    /// Create a new display with the default configuration
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_config(i2c, Config::default())
    }

    /// Create a new display
    #[must_use]
    pub fn new_with_config(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a sequence of commands in a single transaction
    ///
    /// # Errors
    ///
    /// Returns an error if `address` does not fit in 7 bits, if `commands`
    /// is empty, or if the bus transaction fails.
    pub async fn send_commands(&mut self, address: u8, commands: &[u8]) -> Result<(), Error> {
        command::check_address(address)?;
        if commands.is_empty() {
            return Err(Error::EmptyCommand);
        }

        if log_enabled!(Trace) {
            trace!(
                "Send {} command bytes to {address:#04x}: {commands:02x?}",
                commands.len()
            );
        }

        self.i2c
            .transaction(
                address,
                &mut [
                    Operation::Write(&[command::CONTROL_COMMAND_STREAM]),
                    Operation::Write(commands),
                ],
            )
            .await?;

        Ok(())
    }

    /// Release display and return inner bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Display<I2C>
where
    I2C: I2c + ClockControl,
{
    /// Initialize display
    ///
    /// Same sequence as the blocking display. Changing the clock rate
    /// affects every device on the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` does not fit in 7 bits, if `height` is
    /// not in `1..=256`, if the clock rate cannot be set, or if any commands
    /// to the display fails.
    pub async fn initialize(&mut self, address: u8, width: u16, height: u16) -> Result<(), Error> {
        debug!("Initialize {width}x{height} display at {address:#04x}");

        command::check_address(address)?;
        let sequence = InitSequence::new(height, self.config.polarity)?;

        self.set_bus_clock()?;

        for (index, group) in sequence.iter().enumerate() {
            trace!("Send initialization group {}", index + 1);
            self.send_commands(address, group.as_slice()).await?;
        }

        debug!("Initialize display / Done");

        Ok(())
    }

    /// Set the bus clock rate from the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the bus refuses the clock rate.
    fn set_bus_clock(&mut self) -> Result<(), Error> {
        let frequency = self.config.frequency;
        debug!("Set bus clock to {frequency}Hz");
        self.i2c.set_frequency(frequency).map_err(|error| {
            warn!("Cannot set bus clock to {frequency}Hz: {error:?}");
            Error::BusClock
        })
    }
}
