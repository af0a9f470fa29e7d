// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Bus clock configuration
//!
//! `embedded-hal` has no notion of changing the clock rate of a bus after it
//! has been created, so this capability is a separate trait. Changing the
//! clock rate affects every device sharing the bus, not only the display.

use core::convert::Infallible;
use core::fmt::Debug;

use log::debug;

use embedded_hal::i2c::ErrorType;
use embedded_hal::i2c::Operation;

/// A bus whose clock rate can be changed
pub trait ClockControl {
    /// Error raised when the clock rate cannot be changed
    type Error: Debug;

    /// Set the bus clock rate in Hz
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot run at the requested rate
    fn set_frequency(&mut self, frequency: u32) -> Result<(), Self::Error>;
}

impl<T> ClockControl for &mut T
where
    T: ClockControl + ?Sized,
{
    type Error = T::Error;

    fn set_frequency(&mut self, frequency: u32) -> Result<(), T::Error> {
        (**self).set_frequency(frequency)
    }
}

/// A bus whose clock rate was chosen when it was created
///
/// Transactions are forwarded to the inner bus unchanged, and requests to
/// change the clock rate are ignored.
#[derive(Debug)]
pub struct FixedClock<I2C> {
    /// Inner bus
    i2c: I2C,
}

impl<I2C> FixedClock<I2C> {
    /// Wrap a bus
    #[must_use]
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Return the inner bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> ClockControl for FixedClock<I2C> {
    type Error = Infallible;

    fn set_frequency(&mut self, frequency: u32) -> Result<(), Infallible> {
        debug!("Ignore request to set bus clock to {frequency}Hz");
        Ok(())
    }
}

impl<I2C> ErrorType for FixedClock<I2C>
where
    I2C: ErrorType,
{
    type Error = I2C::Error;
}

impl<I2C> embedded_hal::i2c::I2c for FixedClock<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn write(&mut self, address: u8, write: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.write(address, write)
    }

    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), I2C::Error> {
        self.i2c.transaction(address, operations)
    }
}

#[cfg(feature = "async")]
impl<I2C> embedded_hal_async::i2c::I2c for FixedClock<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    async fn write(&mut self, address: u8, write: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.write(address, write).await
    }

    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), I2C::Error> {
        self.i2c.transaction(address, operations).await
    }
}
