// Copyright Claudio Mattera 2024-2025.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! I²C bus whose clock rate can be changed after creation

use log::debug;

use embedded_hal::i2c::ErrorType;
use embedded_hal::i2c::Operation;

use esp_hal::i2c::master::Config as I2cConfig;
use esp_hal::i2c::master::ConfigError as I2cConfigError;
use esp_hal::i2c::master::Error as I2cError;
use esp_hal::i2c::master::I2c;
use esp_hal::time::Rate;
use esp_hal::Async;

use ssd1306_init_rs::ClockControl;

/// An async I²C bus remembering its configuration
pub struct ClockedI2c<'d> {
    /// Inner bus
    i2c: I2c<'d, Async>,

    /// Configuration currently applied to the bus
    config: I2cConfig,
}

impl<'d> ClockedI2c<'d> {
    /// Wrap a bus created with `config`
    pub fn new(i2c: I2c<'d, Async>, config: I2cConfig) -> Self {
        Self { i2c, config }
    }
}

impl ClockControl for ClockedI2c<'_> {
    type Error = I2cConfigError;

    fn set_frequency(&mut self, frequency: u32) -> Result<(), I2cConfigError> {
        debug!("Reconfigure I²C bus to {frequency}Hz");
        let config = self.config.clone().with_frequency(Rate::from_hz(frequency));
        self.i2c.apply_config(&config)?;
        self.config = config;
        Ok(())
    }
}

impl ErrorType for ClockedI2c<'_> {
    type Error = I2cError;
}

impl embedded_hal_async::i2c::I2c for ClockedI2c<'_> {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), I2cError> {
        embedded_hal_async::i2c::I2c::transaction(&mut self.i2c, address, operations).await
    }
}
