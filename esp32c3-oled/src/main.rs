// Copyright Claudio Mattera 2024-2025.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Main crate

#![no_std]
#![no_main]

use log::error;
use log::info;

use embassy_executor::Spawner;

use embassy_time::Duration;
use embassy_time::Timer;

use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::Config as I2cConfig;
use esp_hal::i2c::master::ConfigError as I2cConfigError;
use esp_hal::i2c::master::I2c;
use esp_hal::init as initialize_esp_hal;
use esp_hal::time::Rate;
use esp_hal::timer::systimer::SystemTimer;
use esp_hal::Config as EspConfig;

use esp_hal_embassy::init as initialize_embassy;

use esp_backtrace as _;

use ssd1306_init_rs::AsyncDisplay;
use ssd1306_init_rs::Config as DisplayConfig;
use ssd1306_init_rs::Error as DisplayError;
use ssd1306_init_rs::DEFAULT_ADDRESS;

mod bus;
use self::bus::ClockedI2c;

mod logging;
use self::logging::setup as setup_logging;

/// Panel width in pixels
const WIDTH: u16 = 128;

/// Panel height in pixels
const HEIGHT: u16 = 64;

/// Clock rate of the I²C bus before the display is initialized
///
/// The display driver raises it to fast mode.
const INITIAL_FREQUENCY: Rate = Rate::from_khz(100);

/// Time the controller needs after power-on before accepting commands
const POWER_ON_DELAY: Duration = Duration::from_millis(100);

/// Main task
#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    setup_logging();

    if let Err(error) = main_fallible().await {
        error!("Error while running firmware: {error:?}");
    }
}

/// Main task that can return an error
async fn main_fallible() -> Result<(), Error> {
    let peripherals = initialize_esp_hal(EspConfig::default().with_cpu_clock(CpuClock::max()));

    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    initialize_embassy(systimer.alarm0);

    info!("Create I²C bus");
    let sda = peripherals.GPIO1;
    let scl = peripherals.GPIO2;

    let i2c_config = I2cConfig::default().with_frequency(INITIAL_FREQUENCY);
    let i2c = I2c::new(peripherals.I2C0, i2c_config.clone())?
        .with_sda(sda)
        .with_scl(scl)
        .into_async();
    let bus = ClockedI2c::new(i2c, i2c_config);

    info!("Wait {}ms for display power-on", POWER_ON_DELAY.as_millis());
    Timer::after(POWER_ON_DELAY).await;

    info!("Create display");
    let mut display = AsyncDisplay::new_with_config(bus, DisplayConfig::default());

    info!("Initialize {WIDTH}x{HEIGHT} display at {DEFAULT_ADDRESS:#04x}");
    display.initialize(DEFAULT_ADDRESS, WIDTH, HEIGHT).await?;

    info!("Display is on");

    Ok(())
}

/// An error
#[derive(Debug)]
enum Error {
    /// An error within I²C bus configuration
    #[expect(unused, reason = "Never read directly")]
    I2cConfig(I2cConfigError),

    /// An error within display operations
    #[expect(unused, reason = "Never read directly")]
    Display(DisplayError),
}

impl From<I2cConfigError> for Error {
    fn from(error: I2cConfigError) -> Self {
        Self::I2cConfig(error)
    }
}

impl From<DisplayError> for Error {
    fn from(error: DisplayError) -> Self {
        Self::Display(error)
    }
}
