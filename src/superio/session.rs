//! Extended Function Mode session.
//!
//! A [`SioSession`] is the only way to reach configuration registers. It is
//! created by [`SioSession::acquire`], which obtains the port pair and writes
//! the enter key, and it writes the exit key exactly once when it goes away,
//! whether through [`SioSession::release`], an early `?` return, or a panic
//! unwinding through the caller.
//!
//! ```text
//!   Locked --acquire--> Unlocked --release/drop--> Locked
//! ```

use crate::error::AccessResult;
use crate::superio::registers::{CR_LOGICAL_DEVICE, ENTER_KEY, EXIT_KEY};
use crate::superio::PortIo;
use crate::types::IndexPort;
use tracing::{debug, trace};

/// An unlocked Super I/O chip on one index/data port pair.
pub struct SioSession<'a, P: PortIo + ?Sized> {
    io: &'a mut P,
    port: IndexPort,
}

impl<'a, P: PortIo + ?Sized> SioSession<'a, P> {
    /// Acquire `port` and enter Extended Function Mode.
    ///
    /// # Errors
    /// Returns [`AccessError::Denied`](crate::error::AccessError::Denied) if
    /// the environment refuses the ports. Nothing is written in that case.
    pub fn acquire(io: &'a mut P, port: IndexPort) -> AccessResult<Self> {
        io.acquire(port)?;

        for key in ENTER_KEY {
            io.write_byte(port.as_u16(), key);
        }
        debug!(port = %port, backend = io.name(), "entered extended function mode");

        Ok(Self { io, port })
    }

    /// Index port this session is bound to.
    pub fn port(&self) -> IndexPort {
        self.port
    }

    /// Read configuration register `reg`.
    pub fn read_config_register(&mut self, reg: u8) -> u8 {
        self.io.write_byte(self.port.as_u16(), reg);
        let value = self.io.read_byte(self.port.data_port());
        trace!(port = %self.port, reg, value, "read CR");
        value
    }

    /// Write `value` to configuration register `reg`.
    pub fn write_config_register(&mut self, reg: u8, value: u8) {
        trace!(port = %self.port, reg, value, "write CR");
        self.io.write_byte(self.port.as_u16(), reg);
        self.io.write_byte(self.port.data_port(), value);
    }

    /// Read a 16-bit value spread over two registers, `high` read first.
    pub fn read_config_word(&mut self, high: u8, low: u8) -> u16 {
        let hi = self.read_config_register(high);
        let lo = self.read_config_register(low);
        u16::from_be_bytes([hi, lo])
    }

    /// Point the banked registers (0x30 and up) at logical device `ldn`.
    ///
    /// This changes chip state for the rest of the session.
    pub fn select_logical_device(&mut self, ldn: u8) {
        debug!(port = %self.port, ldn, "selecting logical device");
        self.write_config_register(CR_LOGICAL_DEVICE, ldn);
    }

    /// Leave Extended Function Mode and give the ports back.
    pub fn release(self) {
        // Drop does the work.
    }
}

impl<P: PortIo + ?Sized> Drop for SioSession<'_, P> {
    fn drop(&mut self) {
        self.io.write_byte(self.port.as_u16(), EXIT_KEY);
        self.io.relinquish(self.port);
        debug!(port = %self.port, "left extended function mode");
    }
}
