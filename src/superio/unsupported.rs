//! Backend for targets without user-space port I/O.

use crate::error::{AccessError, AccessResult};
use crate::superio::PortIo;
use crate::types::IndexPort;

/// Refuses every acquisition, so probing reports nothing.
#[derive(Debug, Default)]
pub struct UnsupportedPorts;

impl PortIo for UnsupportedPorts {
    fn acquire(&mut self, port: IndexPort) -> AccessResult<()> {
        Err(AccessError::Denied {
            port,
            reason: "port I/O is not supported on this platform".to_string(),
        })
    }

    fn read_byte(&mut self, _port: u16) -> u8 {
        0xFF
    }

    fn write_byte(&mut self, _port: u16, _value: u8) {}

    fn name(&self) -> &'static str {
        "unsupported"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_denies() {
        let mut io = UnsupportedPorts;
        for port in IndexPort::DEFAULT_CANDIDATES {
            assert_eq!(io.acquire(port).unwrap_err().port(), port);
        }
    }
}
