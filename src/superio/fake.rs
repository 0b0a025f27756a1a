//! Recording port backend for tests.
//!
//! Emulates the Nuvoton index/data protocol closely enough to catch ordering
//! mistakes: a chip only answers after two consecutive enter-key writes,
//! banked registers follow the selected logical device, and a locked chip
//! leaves the data port floating at 0xFF.

use crate::error::{AccessError, AccessResult};
use crate::superio::registers::{
    CR_BASE_HIGH, CR_BASE_LOW, CR_CHIP_ID_HIGH, CR_CHIP_ID_LOW, CR_DEVICE_BANK_START,
    CR_LOGICAL_DEVICE, ENTER_KEY, EXIT_KEY,
};
use crate::superio::PortIo;
use crate::types::IndexPort;
use std::collections::{HashMap, HashSet};

/// One observed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Acquire(IndexPort),
    Denied(IndexPort),
    Write(u16, u8),
    Read(u16, u8),
    Relinquish(IndexPort),
}

/// Register file of one emulated Super I/O chip.
#[derive(Debug, Clone, Default)]
pub struct FakeChip {
    global: HashMap<u8, u8>,
    banked: HashMap<(u8, u8), u8>,
    keys_seen: usize,
    unlocked: bool,
    index: u8,
    ldn: u8,
}

impl FakeChip {
    pub fn new(chip_id: u16) -> Self {
        let [hi, lo] = chip_id.to_be_bytes();
        let mut chip = Self::default();
        chip.global.insert(CR_CHIP_ID_HIGH, hi);
        chip.global.insert(CR_CHIP_ID_LOW, lo);
        chip
    }

    /// Program the I/O base of logical device `ldn`.
    pub fn with_device_base(mut self, ldn: u8, base: u16) -> Self {
        let [hi, lo] = base.to_be_bytes();
        self.banked.insert((ldn, CR_BASE_HIGH), hi);
        self.banked.insert((ldn, CR_BASE_LOW), lo);
        self
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn selected_device(&self) -> u8 {
        self.ldn
    }

    fn write_index(&mut self, value: u8) {
        if !self.unlocked {
            if value == ENTER_KEY[self.keys_seen] {
                self.keys_seen += 1;
                if self.keys_seen == ENTER_KEY.len() {
                    self.unlocked = true;
                    self.keys_seen = 0;
                }
            } else {
                self.keys_seen = 0;
            }
            return;
        }

        if value == EXIT_KEY {
            self.unlocked = false;
        } else {
            self.index = value;
        }
    }

    fn write_data(&mut self, value: u8) {
        if !self.unlocked {
            return;
        }
        if self.index == CR_LOGICAL_DEVICE {
            self.ldn = value;
        } else if self.index >= CR_DEVICE_BANK_START {
            self.banked.insert((self.ldn, self.index), value);
        } else {
            self.global.insert(self.index, value);
        }
    }

    fn read_data(&self) -> u8 {
        if !self.unlocked {
            return 0xFF;
        }
        let value = if self.index == CR_LOGICAL_DEVICE {
            Some(&self.ldn)
        } else if self.index >= CR_DEVICE_BANK_START {
            self.banked.get(&(self.ldn, self.index))
        } else {
            self.global.get(&self.index)
        };
        value.copied().unwrap_or(0xFF)
    }
}

/// Fake environment: per-port grant/deny plus a full call trace.
#[derive(Debug, Default)]
pub struct FakePorts {
    chips: HashMap<IndexPort, FakeChip>,
    denied: HashSet<IndexPort>,
    trace: Vec<Op>,
    reads_left: Option<usize>,
}

impl FakePorts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant access to `port` and answer with `chip`.
    pub fn with_chip(mut self, port: IndexPort, chip: FakeChip) -> Self {
        self.chips.insert(port, chip);
        self
    }

    /// Refuse any acquisition of `port`.
    pub fn with_denied(mut self, port: IndexPort) -> Self {
        self.denied.insert(port);
        self
    }

    /// Panic on the read after `reads` successful data-port reads.
    pub fn with_read_fault_after(mut self, reads: usize) -> Self {
        self.reads_left = Some(reads);
        self
    }

    pub fn trace(&self) -> &[Op] {
        &self.trace
    }

    pub fn chip(&self, port: IndexPort) -> Option<&FakeChip> {
        self.chips.get(&port)
    }

    /// Ops recorded between the acquisition of `port` and its relinquish.
    pub fn session_ops(&self, port: IndexPort) -> Vec<Op> {
        let start = self.trace.iter().position(|op| *op == Op::Acquire(port));
        let end = self.trace.iter().position(|op| *op == Op::Relinquish(port));
        match (start, end) {
            (Some(s), Some(e)) if s <= e => self.trace[s..=e].to_vec(),
            _ => Vec::new(),
        }
    }

    /// Every granted acquisition is followed by the enter key, later by the
    /// exit key, then a relinquish, before any other acquisition starts.
    pub fn sessions_balanced(&self) -> bool {
        let mut open: Option<IndexPort> = None;
        let mut exit_written = false;

        for (i, op) in self.trace.iter().enumerate() {
            match *op {
                Op::Acquire(port) => {
                    if open.is_some() {
                        return false;
                    }
                    let idx = port.as_u16();
                    let enter = ENTER_KEY.map(|key| Op::Write(idx, key));
                    if self.trace.get(i + 1..i + 1 + enter.len()) != Some(&enter[..]) {
                        return false;
                    }
                    open = Some(port);
                    exit_written = false;
                }
                Op::Write(addr, EXIT_KEY) if open.map(IndexPort::as_u16) == Some(addr) => {
                    exit_written = true;
                }
                Op::Write(addr, _) | Op::Read(addr, _) => {
                    let Some(port) = open else {
                        return false;
                    };
                    if exit_written || (addr != port.as_u16() && addr != port.data_port()) {
                        return false;
                    }
                }
                Op::Relinquish(port) => {
                    if open != Some(port) || !exit_written {
                        return false;
                    }
                    open = None;
                }
                Op::Denied(_) => {
                    if open.is_some() {
                        return false;
                    }
                }
            }
        }

        open.is_none()
    }

    fn chip_at(&mut self, addr: u16) -> Option<(&mut FakeChip, bool)> {
        if let Ok(port) = IndexPort::try_from(addr) {
            if self.chips.contains_key(&port) {
                return self.chips.get_mut(&port).map(|chip| (chip, true));
            }
        }
        let port = IndexPort::try_from(addr.checked_sub(1)?).ok()?;
        self.chips.get_mut(&port).map(|chip| (chip, false))
    }
}

impl PortIo for FakePorts {
    fn acquire(&mut self, port: IndexPort) -> AccessResult<()> {
        if self.denied.contains(&port) {
            self.trace.push(Op::Denied(port));
            return Err(AccessError::Denied {
                port,
                reason: "Device or resource busy".to_string(),
            });
        }
        self.trace.push(Op::Acquire(port));
        Ok(())
    }

    fn read_byte(&mut self, port: u16) -> u8 {
        if let Some(left) = self.reads_left.as_mut() {
            if *left == 0 {
                panic!("injected read fault on port {:#04X}", port);
            }
            *left -= 1;
        }
        let value = match self.chip_at(port) {
            Some((chip, false)) => chip.read_data(),
            _ => 0xFF,
        };
        self.trace.push(Op::Read(port, value));
        value
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        match self.chip_at(port) {
            Some((chip, true)) => chip.write_index(value),
            Some((chip, false)) => chip.write_data(value),
            None => {}
        }
        self.trace.push(Op::Write(port, value));
    }

    fn relinquish(&mut self, port: IndexPort) {
        self.trace.push(Op::Relinquish(port));
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_needs_both_enter_keys() {
        let mut io = FakePorts::new().with_chip(IndexPort::PRIMARY, FakeChip::new(0xD428));

        io.write_byte(0x2E, 0x87);
        io.write_byte(0x2E, 0x20);
        assert_eq!(io.read_byte(0x2F), 0xFF);

        io.write_byte(0x2E, 0x87);
        io.write_byte(0x2E, 0x87);
        io.write_byte(0x2E, 0x20);
        assert_eq!(io.read_byte(0x2F), 0xD4);
    }

    #[test]
    fn test_banked_registers_follow_ldn() {
        let chip = FakeChip::new(0xD428)
            .with_device_base(0x0B, 0x0290)
            .with_device_base(0x02, 0x03F8);
        let mut io = FakePorts::new().with_chip(IndexPort::PRIMARY, chip);
        io.write_byte(0x2E, 0x87);
        io.write_byte(0x2E, 0x87);

        io.write_byte(0x2E, 0x07);
        io.write_byte(0x2F, 0x02);
        io.write_byte(0x2E, 0x60);
        assert_eq!(io.read_byte(0x2F), 0x03);

        io.write_byte(0x2E, 0x07);
        io.write_byte(0x2F, 0x0B);
        io.write_byte(0x2E, 0x60);
        assert_eq!(io.read_byte(0x2F), 0x02);
        assert_eq!(io.chip(IndexPort::PRIMARY).unwrap().selected_device(), 0x0B);
    }

    #[test]
    fn test_unbalanced_trace_is_detected() {
        let mut io = FakePorts::new().with_chip(IndexPort::PRIMARY, FakeChip::new(0xD428));
        io.acquire(IndexPort::PRIMARY).unwrap();
        io.write_byte(0x2E, 0x87);
        io.write_byte(0x2E, 0x87);
        assert!(!io.sessions_balanced());

        io.write_byte(0x2E, 0xAA);
        io.relinquish(IndexPort::PRIMARY);
        assert!(io.sessions_balanced());
    }
}
