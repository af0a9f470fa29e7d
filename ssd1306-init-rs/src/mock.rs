// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Recording bus for tests

extern crate std;

use std::vec::Vec;

use embedded_hal::i2c::ErrorKind;
use embedded_hal::i2c::ErrorType;
use embedded_hal::i2c::NoAcknowledgeSource;
use embedded_hal::i2c::Operation;

use crate::ClockControl;

/// A transaction seen on the bus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Target address
    pub address: u8,

    /// Written bytes, in order, across all operations
    pub bytes: Vec<u8>,
}

/// Bus event, in the order it happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Clock rate changed
    Clock(u32),

    /// Transaction attempted
    Transaction,
}

/// A bus recording every transaction and clock change
#[derive(Debug, Default)]
pub struct MockBus {
    /// Completed transactions
    transactions: Vec<Transaction>,

    /// Applied clock rates
    frequencies: Vec<u32>,

    /// Every event, including failed transactions
    events: Vec<Event>,

    /// Number of transactions attempted so far
    attempts: usize,

    /// Index of the transaction that is not acknowledged
    fail_at: Option<usize>,

    /// Whether clock changes are refused
    refuse_clock: bool,
}

impl MockBus {
    /// Create a bus acknowledging everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus that does not acknowledge the transaction at `index`
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// Create a bus that refuses clock changes
    pub fn refusing_clock() -> Self {
        Self {
            refuse_clock: true,
            ..Self::default()
        }
    }

    /// Completed transactions
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Applied clock rates
    pub fn frequencies(&self) -> &[u32] {
        &self.frequencies
    }

    /// Every event
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of transactions attempted, including failed ones
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Record a transaction
    fn record(&mut self, address: u8, operations: &[Operation<'_>]) -> Result<(), ErrorKind> {
        let index = self.attempts;
        self.attempts += 1;
        self.events.push(Event::Transaction);

        if self.fail_at == Some(index) {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let mut bytes = Vec::new();
        for operation in operations {
            match *operation {
                Operation::Write(chunk) => bytes.extend_from_slice(chunk),
                Operation::Read(_) => return Err(ErrorKind::Other),
            }
        }

        self.transactions.push(Transaction { address, bytes });
        Ok(())
    }
}

impl ErrorType for MockBus {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        self.record(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for MockBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        self.record(address, operations)
    }
}

impl ClockControl for MockBus {
    type Error = ErrorKind;

    fn set_frequency(&mut self, frequency: u32) -> Result<(), ErrorKind> {
        if self.refuse_clock {
            return Err(ErrorKind::Other);
        }
        self.frequencies.push(frequency);
        self.events.push(Event::Clock(frequency));
        Ok(())
    }
}
