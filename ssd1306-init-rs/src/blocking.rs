// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Blocking display

use log::debug;
use log::log_enabled;
use log::trace;
use log::warn;
use log::Level::Trace;

use embedded_hal::i2c::I2c;
use embedded_hal::i2c::Operation;

use crate::command;
use crate::ClockControl;
use crate::Config;
use crate::Error;
use crate::InitSequence;

/// An SSD1306 OLED controller on an I²C bus
///
/// The display does not remember which address it talks to: every operation
/// takes the address, so the same bus can drive several controllers.
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
    /// The transaction starts with the command-stream control byte and is
    /// followed by `commands`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` does not fit in 7 bits, if `commands`
    /// is empty, or if the bus transaction fails.
    pub fn send_commands(&mut self, address: u8, commands: &[u8]) -> Result<(), Error> {
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

        self.i2c.transaction(
            address,
            &mut [
                Operation::Write(&[command::CONTROL_COMMAND_STREAM]),
                Operation::Write(commands),
            ],
        )?;

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
    /// Set the bus clock rate, then send the initialization sequence one
    /// group at a time. Changing the clock rate affects every device on the
    /// bus. `width` does not influence the sequence.
    ///
    /// The sequence stops at the first failing group, leaving the controller
    /// partially configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` does not fit in 7 bits, if `height` is
    /// not in `1..=256`, if the clock rate cannot be set, or if any commands
    /// to the display fails.
    pub fn initialize(&mut self, address: u8, width: u16, height: u16) -> Result<(), Error> {
        debug!("Initialize {width}x{height} display at {address:#04x}");

        command::check_address(address)?;
        let sequence = InitSequence::new(height, self.config.polarity)?;

        self.set_bus_clock()?;

        for (index, group) in sequence.iter().enumerate() {
            trace!("Send initialization group {}", index + 1);
            self.send_commands(address, group.as_slice())?;
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

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal::i2c::NoAcknowledgeSource;

    use super::*;

    use crate::mock::Event;
    use crate::mock::MockBus;
    use crate::Polarity;
    use crate::DEFAULT_ADDRESS;

    #[test]
    fn send_commands_prefixes_control_byte() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.send_commands(0x3C, &[0xAE]), Ok(()));
        assert_eq!(display.send_commands(0x3D, &[0x81, 0x7F]), Ok(()));

        let bus = display.release();
        let transactions = bus.transactions();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].address, 0x3C);
        assert_eq!(transactions[0].bytes, [0x00, 0xAE]);
        assert_eq!(transactions[1].address, 0x3D);
        assert_eq!(transactions[1].bytes, [0x00, 0x81, 0x7F]);
    }

    #[test]
    fn send_commands_rejects_empty_sequence() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.send_commands(0x3C, &[]), Err(Error::EmptyCommand));
        assert_eq!(display.release().attempts(), 0);
    }

    #[test]
    fn send_commands_rejects_wide_address() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(
            display.send_commands(0x80, &[0xAF]),
            Err(Error::InvalidAddress(0x80))
        );
        assert_eq!(display.send_commands(0x7F, &[0xAF]), Ok(()));
        assert_eq!(display.release().attempts(), 1);
    }

    #[test]
    fn send_commands_reports_missing_acknowledge() {
        let mut display = Display::new(MockBus::failing_at(0));
        assert_eq!(
            display.send_commands(0x3C, &[0xAF]),
            Err(Error::I2c(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address
            )))
        );
    }

    #[test]
    fn initialize_sends_six_groups_after_clock() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.initialize(DEFAULT_ADDRESS, 128, 64), Ok(()));

        let bus = display.release();
        assert_eq!(bus.frequencies(), [400_000]);
        assert_eq!(bus.events().first(), Some(&Event::Clock(400_000)));

        let transactions = bus.transactions();
        assert_eq!(transactions.len(), 6);
        assert!(transactions
            .iter()
            .all(|transaction| transaction.address == 0x3C));
        assert_eq!(transactions[0].bytes, [0x00, 0xAE, 0xD5, 0x80, 0xA8, 0x3F]);
        assert_eq!(transactions[1].bytes, [0x00, 0xD3, 0x00, 0x40, 0x8D, 0x14]);
        assert_eq!(transactions[2].bytes, [0x00, 0x20, 0x00, 0xA1, 0xC8]);
        assert_eq!(transactions[3].bytes, [0x00, 0xDA, 0x12, 0x81, 0xCF]);
        assert_eq!(transactions[4].bytes, [0x00, 0xD9, 0x22, 0xDB, 0x20]);
        assert_eq!(transactions[5].bytes, [0x00, 0xA4, 0xA7, 0x2E, 0xAF]);
    }

    #[test]
    fn initialize_uses_height_for_multiplex_only() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.initialize(0x3C, 128, 32), Ok(()));
        assert_eq!(display.initialize(0x3C, 64, 64), Ok(()));

        let bus = display.release();
        let transactions = bus.transactions();
        assert_eq!(transactions.len(), 12);
        assert_eq!(transactions[0].bytes, [0x00, 0xAE, 0xD5, 0x80, 0xA8, 0x1F]);
        assert_eq!(transactions[6].bytes, [0x00, 0xAE, 0xD5, 0x80, 0xA8, 0x3F]);
        assert_eq!(transactions[1..6], transactions[7..12]);
    }

    #[test]
    fn initialize_twice_is_identical() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.initialize(0x3C, 128, 64), Ok(()));
        assert_eq!(display.initialize(0x3C, 128, 64), Ok(()));

        let bus = display.release();
        let transactions = bus.transactions();
        assert_eq!(transactions.len(), 12);
        assert_eq!(transactions[..6], transactions[6..]);
        assert_eq!(bus.frequencies(), [400_000, 400_000]);
    }

    #[test]
    fn initialize_rejects_height_before_touching_bus() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(
            display.initialize(0x3C, 128, 257),
            Err(Error::InvalidHeight(257))
        );
        assert_eq!(
            display.initialize(0x3C, 128, 0),
            Err(Error::InvalidHeight(0))
        );

        let bus = display.release();
        assert!(bus.events().is_empty());
    }

    #[test]
    fn initialize_rejects_wide_address() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(
            display.initialize(0x80, 128, 64),
            Err(Error::InvalidAddress(0x80))
        );
        assert!(display.release().events().is_empty());
    }

    #[test]
    fn initialize_accepts_tallest_panel() {
        let mut display = Display::new(MockBus::new());
        assert_eq!(display.initialize(0x3C, 128, 256), Ok(()));
        let bus = display.release();
        assert_eq!(bus.transactions()[0].bytes[5], 0xFF);
    }

    #[test]
    fn initialize_stops_at_first_failure() {
        let mut display = Display::new(MockBus::failing_at(2));
        assert_eq!(
            display.initialize(0x3C, 128, 64),
            Err(Error::I2c(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address
            )))
        );

        let bus = display.release();
        assert_eq!(bus.attempts(), 3);
        assert_eq!(bus.transactions().len(), 2);
    }

    #[test]
    fn initialize_stops_when_clock_is_refused() {
        let mut display = Display::new(MockBus::refusing_clock());
        assert_eq!(display.initialize(0x3C, 128, 64), Err(Error::BusClock));
        assert_eq!(display.release().attempts(), 0);
    }

    #[test]
    fn initialize_honours_configuration() {
        let config = Config::default()
            .with_frequency(100_000)
            .with_polarity(Polarity::Normal);
        let mut display = Display::new_with_config(MockBus::new(), config);
        assert_eq!(display.config(), &config);
        assert_eq!(display.initialize(0x3D, 128, 64), Ok(()));

        let bus = display.release();
        assert_eq!(bus.frequencies(), [100_000]);
        assert_eq!(bus.transactions()[5].address, 0x3D);
        assert_eq!(bus.transactions()[5].bytes, [0x00, 0xA4, 0xA6, 0x2E, 0xAF]);
    }

    #[test]
    fn initialize_works_on_borrowed_bus() {
        let mut bus = MockBus::new();
        {
            let mut display = Display::new(&mut bus);
            assert_eq!(display.initialize(0x3C, 128, 64), Ok(()));
        }
        assert_eq!(bus.transactions().len(), 6);
    }
}
