// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Commands
//!
//! Opcodes of the SSD1306 command set. Parameterized commands take their
//! parameters as the following bytes of the same command stream; commands
//! documented as a base value carry their parameter in the low bits.

use crate::Error;

/// Default I²C address (SA0 pin low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate I²C address (SA0 pin high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Largest 7-bit address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Control byte announcing that the rest of the transaction is commands
pub const CONTROL_COMMAND_STREAM: u8 = 0x00;

/// Control byte announcing that the rest of the transaction is pixel data
///
/// Never sent by this crate.
pub const CONTROL_DATA_STREAM: u8 = 0x40;

// Fundamental commands

/// Command for setting contrast control (1 parameter)
pub const SET_CONTRAST: u8 = 0x81;

/// Command for resuming display from RAM content
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Command for lighting every pixel regardless of RAM content
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Command for normal, non-inverted output
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Command for inverted output
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Command for switching display off (sleep mode)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Command for switching display on
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Command for setting up right horizontal scroll
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Command for setting up left horizontal scroll
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Command for setting up vertical and right horizontal scroll
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Command for setting up vertical and left horizontal scroll
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Command for deactivating scroll
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Command for activating scroll
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Command for setting vertical scroll area (2 parameters)
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// Addressing commands

/// Base command for setting lower column start address in page mode
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Base command for setting higher column start address in page mode
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Command for setting memory addressing mode (1 parameter)
pub const MEMORY_MODE: u8 = 0x20;

/// Command for setting column start and end address (2 parameters)
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Command for setting page start and end address (2 parameters)
pub const PAGE_ADDRESS: u8 = 0x22;

/// Parameter of [`MEMORY_MODE`] for horizontal addressing
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Parameter of [`MEMORY_MODE`] for vertical addressing
pub const MEMORY_MODE_VERTICAL: u8 = 0x01;

/// Parameter of [`MEMORY_MODE`] for page addressing
pub const MEMORY_MODE_PAGE: u8 = 0x02;

// Hardware configuration commands

/// Base command for setting display start line (line in low 6 bits)
pub const SET_START_LINE: u8 = 0x40;

/// Base command for segment re-map (bit 0 mirrors columns)
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Command for setting multiplex ratio (1 parameter)
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Command for scanning COM outputs from COM0 upwards
pub const COM_SCAN_INCREMENT: u8 = 0xC0;

/// Command for scanning COM outputs from COM[N-1] downwards
pub const COM_SCAN_DECREMENT: u8 = 0xC8;

/// Command for setting display offset (1 parameter)
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Command for setting COM pins hardware configuration (1 parameter)
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Command for setting display clock divide ratio and oscillator frequency (1 parameter)
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Command for setting pre-charge period (1 parameter)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Command for setting VCOMH deselect level (1 parameter)
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Command for charge pump setting (1 parameter)
pub const CHARGE_PUMP: u8 = 0x8D;

/// Parameter of [`CHARGE_PUMP`] enabling the internal regulator
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Parameter of [`CHARGE_PUMP`] disabling the internal regulator
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

/// Panel voltage supplied externally on VCC
pub const EXTERNAL_VCC: u8 = 0x01;

/// Panel voltage generated from the 3.3V supply by the charge pump
pub const SWITCH_CAP_VCC: u8 = 0x02;

/// Check that an address fits in 7 bits
///
/// # Errors
///
/// Returns an error if `address` is above [`MAX_ADDRESS`].
pub(crate) fn check_address(address: u8) -> Result<(), Error> {
    if address > MAX_ADDRESS {
        return Err(Error::InvalidAddress(address));
    }
    Ok(())
}
