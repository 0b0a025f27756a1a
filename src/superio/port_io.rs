//! Port I/O capability trait.
//!
//! Everything that touches real hardware sits behind [`PortIo`], so the
//! register protocol in [`session`](super::session) and
//! [`probe`](super::probe) can run against a recording fake in tests.

use crate::error::AccessResult;
use crate::types::IndexPort;

/// Raw byte-wide access to x86 I/O ports.
///
/// `read_byte` and `write_byte` are unconditional: they assume `acquire`
/// has already succeeded for the port pair being touched and perform no
/// bounds or protocol checks of their own.
pub trait PortIo {
    /// Request exclusive access to `port` and its data port from the
    /// operating environment.
    fn acquire(&mut self, port: IndexPort) -> AccessResult<()>;

    /// Read one byte from an I/O port.
    fn read_byte(&mut self, port: u16) -> u8;

    /// Write one byte to an I/O port.
    fn write_byte(&mut self, port: u16, value: u8);

    /// Hand access to `port` and its data port back to the environment.
    ///
    /// Only called after a successful `acquire`.
    fn relinquish(&mut self, _port: IndexPort) {}

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// A boxed backend for dynamic dispatch.
pub type BoxedPortIo = Box<dyn PortIo>;
