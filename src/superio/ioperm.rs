//! Linux `ioperm(2)` backend.
//!
//! # Privileges Required
//!
//! `ioperm` needs `CAP_SYS_RAWIO` (normally root). It also fails when the
//! kernel refuses the range, which is what happens on boards whose ACPI
//! tables claim the Super I/O ports.

use crate::error::{AccessError, AccessResult};
use crate::superio::PortIo;
use crate::types::IndexPort;
use tracing::debug;

/// Number of ports covered by one acquisition: index and data.
const PORT_PAIR: libc::c_ulong = 2;

/// Direct port I/O through the process I/O permission bitmap.
#[derive(Debug, Default)]
pub struct IopermPorts {
    _private: (),
}

impl IopermPorts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortIo for IopermPorts {
    fn acquire(&mut self, port: IndexPort) -> AccessResult<()> {
        // SAFETY: ioperm only edits this process's I/O permission bitmap.
        let rc = unsafe { libc::ioperm(libc::c_ulong::from(port.as_u16()), PORT_PAIR, 1) };
        if rc != 0 {
            return Err(AccessError::from_last_os_error(port));
        }
        debug!(port = %port, "ioperm granted");
        Ok(())
    }

    fn read_byte(&mut self, port: u16) -> u8 {
        // SAFETY: acquire() granted this port; reads have no memory effects.
        unsafe { inb(port) }
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        // SAFETY: acquire() granted this port; writes have no memory effects.
        unsafe { outb(port, value) }
    }

    fn relinquish(&mut self, port: IndexPort) {
        // SAFETY: dropping permission cannot violate memory safety.
        let rc = unsafe { libc::ioperm(libc::c_ulong::from(port.as_u16()), PORT_PAIR, 0) };
        if rc != 0 {
            debug!(
                port = %port,
                error = %std::io::Error::last_os_error(),
                "ioperm release failed"
            );
        }
    }

    fn name(&self) -> &'static str {
        "ioperm"
    }
}

/// Read a byte from an I/O port.
///
/// # Safety
///
/// The calling thread must hold I/O permission for `port`, otherwise the
/// instruction faults and the process is killed with SIGSEGV.
#[inline]
unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    core::arch::asm!(
        "in al, dx",
        out("al") value,
        in("dx") port,
        options(nostack, preserves_flags)
    );
    value
}

/// Write a byte to an I/O port.
///
/// # Safety
///
/// Same requirement as [`inb`].
#[inline]
unsafe fn outb(port: u16, value: u8) {
    core::arch::asm!(
        "out dx, al",
        in("dx") port,
        in("al") value,
        options(nostack, preserves_flags)
    );
}
