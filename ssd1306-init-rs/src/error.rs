// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Data structures and functions for error handling

use embedded_hal::i2c::Error as I2cError;
use embedded_hal::i2c::ErrorKind as I2cErrorKind;

/// An error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An error in the underlying I²C bus
    I2c(I2cErrorKind),

    /// The bus refused to change its clock rate
    BusClock,

    /// The address does not fit in 7 bits
    InvalidAddress(u8),

    /// A command sequence without any byte
    EmptyCommand,

    /// The panel height is outside `1..=256`
    InvalidHeight(u16),
}

impl<E> From<E> for Error
where
    E: I2cError,
{
    fn from(error: E) -> Self {
        Self::I2c(error.kind())
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::I2c(kind) => write!(f, "I²C error: {kind}"),
            Self::BusClock => write!(f, "Cannot set bus clock rate"),
            Self::InvalidAddress(address) => {
                write!(f, "Address {address:#04x} does not fit in 7 bits")
            }
            Self::EmptyCommand => write!(f, "Empty command sequence"),
            Self::InvalidHeight(height) => {
                write!(f, "Panel height {height} is outside 1..=256")
            }
        }
    }
}
