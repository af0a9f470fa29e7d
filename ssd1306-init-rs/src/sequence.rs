// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Initialization sequence
//!
//! The vendor bring-up sequence is kept here as one ordered table of command
//! groups. Each group is sent as its own transaction, in table order. Only
//! the multiplex ratio in the first group and the polarity opcode in the last
//! one depend on the caller.

use core::slice::Iter;

use crate::command;
use crate::Error;
use crate::Polarity;

/// Number of command groups in the initialization sequence
pub const GROUP_COUNT: usize = 6;

/// Capacity of a command group, i.e. the length of the longest group
const GROUP_CAPACITY: usize = 5;

/// Tallest panel the multiplex ratio can describe
const MAX_HEIGHT: u16 = 256;

/// Placeholder for bytes patched in by [`InitSequence::new`]
const PATCHED: u8 = 0x00;

/// Position of the multiplex ratio in the first group
const MULTIPLEX_INDEX: usize = 4;

/// Position of the polarity opcode in the last group
const POLARITY_INDEX: usize = 1;

/// The vendor sequence
const TABLE: [&[u8]; GROUP_COUNT] = [
    // Display off, oscillator, multiplex ratio
    &[
        command::DISPLAY_OFF,
        command::SET_DISPLAY_CLOCK_DIV,
        0x80,
        command::SET_MULTIPLEX,
        PATCHED,
    ],
    // Offset, start line, charge pump
    &[
        command::SET_DISPLAY_OFFSET,
        0x00,
        // Start line 0
        command::SET_START_LINE,
        command::CHARGE_PUMP,
        command::CHARGE_PUMP_ENABLE,
    ],
    // Addressing and orientation
    &[
        command::MEMORY_MODE,
        0x00,
        command::SEGMENT_REMAP | 0x01,
        command::COM_SCAN_DECREMENT,
    ],
    // Electrical levels
    &[command::SET_COM_PINS, 0x12, command::SET_CONTRAST, 0xCF],
    // Pre-charge and VCOMH
    &[command::SET_PRECHARGE, 0x22, command::SET_VCOM_DETECT, 0x20],
    // Power on
    &[
        command::DISPLAY_ALL_ON_RESUME,
        PATCHED,
        command::DEACTIVATE_SCROLL,
        command::DISPLAY_ON,
    ],
];

// Every group fits in a `CommandGroup` and the patched bytes exist
const _: () = {
    let mut index = 0;
    while index < GROUP_COUNT {
        assert!(
            TABLE[index].len() <= GROUP_CAPACITY,
            "Command group longer than GROUP_CAPACITY"
        );
        index += 1;
    }
    assert!(
        MULTIPLEX_INDEX < TABLE[0].len(),
        "Multiplex ratio outside first group"
    );
    assert!(
        POLARITY_INDEX < TABLE[GROUP_COUNT - 1].len(),
        "Polarity opcode outside last group"
    );
};

/// Compute the multiplex ratio parameter for a panel height
///
/// # Errors
///
/// Returns an error if `height` is not in `1..=256`.
pub fn multiplex_ratio(height: u16) -> Result<u8, Error> {
    if height == 0 || height > MAX_HEIGHT {
        return Err(Error::InvalidHeight(height));
    }
    u8::try_from(height - 1).map_err(|_| Error::InvalidHeight(height))
}

/// A sequence of command bytes sent in one transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandGroup {
    /// Storage
    bytes: [u8; GROUP_CAPACITY],

    /// Number of used bytes
    len: usize,
}

impl CommandGroup {
    /// Create a group from a table entry
    ///
    /// Table entries are checked at compile time to fit in the group.
    fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0; GROUP_CAPACITY];
        let len = slice.len().min(GROUP_CAPACITY);
        for (target, source) in bytes.iter_mut().zip(slice) {
            *target = *source;
        }
        Self { bytes, len }
    }

    /// Overwrite a byte of the group
    ///
    /// Patched positions are checked at compile time to be in range.
    fn patch(&mut self, index: usize, value: u8) {
        if let Some(byte) = self.bytes.get_mut(..self.len).and_then(|bytes| bytes.get_mut(index)) {
            *byte = value;
        }
    }

    /// Get the command bytes
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&[])
    }
}

impl AsRef<[u8]> for CommandGroup {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// The initialization sequence for a panel
///
/// Building the sequence is pure: the same height and polarity always
/// produce the same groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitSequence {
    /// Command groups in transmission order
    groups: [CommandGroup; GROUP_COUNT],
}

impl InitSequence {
    /// Build the sequence for a panel height
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is not in `1..=256`.
    pub fn new(height: u16, polarity: Polarity) -> Result<Self, Error> {
        let multiplex = multiplex_ratio(height)?;

        let mut groups = TABLE.map(CommandGroup::from_slice);
        if let Some(first) = groups.first_mut() {
            first.patch(MULTIPLEX_INDEX, multiplex);
        }
        if let Some(last) = groups.last_mut() {
            last.patch(POLARITY_INDEX, polarity.opcode());
        }

        Ok(Self { groups })
    }

    /// Get the command groups in transmission order
    #[must_use]
    pub fn groups(&self) -> &[CommandGroup] {
        &self.groups
    }

    /// Iterate over the command groups in transmission order
    pub fn iter(&self) -> Iter<'_, CommandGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a InitSequence {
    type Item = &'a CommandGroup;
    type IntoIter = Iter<'a, CommandGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
