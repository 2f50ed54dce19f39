//! Test doubles shared by the integration tests
//!
//! `FakeBus` is an in-memory AXP192 register file behind the I2C traits.
//! `Recorder` keeps every diagnostic the driver emits.

#![allow(dead_code)]

use axp192::{Diagnostics, Level};
use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

pub struct FakeBus {
    pub address: u8,
    pub registers: [u8; 256],
    /// Every (register, value) pair written, in order
    pub writes: Vec<(u8, u8)>,
    pub transactions: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            address: axp192::AXP192_SLAVE_ADDRESS,
            registers: [0; 256],
            writes: Vec::new(),
            transactions: 0,
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn with_register(mut self, reg: u8, value: u8) -> Self {
        self.registers[reg as usize] = value;
        self
    }

    pub fn reg(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    pub fn last_write(&self) -> Option<(u8, u8)> {
        self.writes.last().copied()
    }

    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        self.transactions += 1;
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let is_read = operations
            .iter()
            .any(|op| matches!(op, Operation::Read(_)));
        if (is_read && self.fail_reads) || (!is_read && self.fail_writes) {
            return Err(ErrorKind::Bus);
        }

        let mut pointer: Option<u8> = None;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let (first, data) = bytes.split_first().ok_or(ErrorKind::Other)?;
                    let mut reg = *first;
                    for &value in data {
                        self.registers[reg as usize] = value;
                        self.writes.push((reg, value));
                        reg = reg.wrapping_add(1);
                    }
                    pointer = Some(reg);
                }
                Operation::Read(buf) => {
                    let mut reg = pointer.ok_or(ErrorKind::Other)?;
                    for byte in buf.iter_mut() {
                        *byte = self.registers[reg as usize];
                        reg = reg.wrapping_add(1);
                    }
                    pointer = Some(reg);
                }
            }
        }
        Ok(())
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for FakeBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[derive(Default)]
pub struct Recorder {
    pub entries: Vec<(Level, String)>,
}

impl Recorder {
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.at(level).iter().any(|m| m.contains(needle))
    }
}

impl Diagnostics for Recorder {
    fn record(&mut self, level: Level, message: core::fmt::Arguments<'_>) {
        self.entries.push((level, message.to_string()));
    }
}
