//! Super I/O register protocol.
//!
//! Layered bottom-up:
//!
//! - [`PortIo`] - raw byte access to I/O ports, one backend per platform
//! - [`SioSession`] - Extended Function Mode window on one index/data pair
//! - [`probe_candidates`] - walks the candidate index ports and reads the
//!   chip ID and hardware monitor base from each one that can be opened

pub mod chip;
pub mod port_io;
pub mod probe;
pub mod registers;
pub mod session;
pub mod unsupported;

#[cfg(all(
    target_os = "linux",
    target_env = "gnu",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub mod ioperm;

#[cfg(test)]
pub(crate) mod fake;

pub use chip::{SioChip, KNOWN_CHIPS};
pub use port_io::{BoxedPortIo, PortIo};
pub use probe::{probe_candidates, probe_port, ProbeResult};
pub use session::SioSession;

/// The port backend for the platform this binary was built for.
#[cfg(all(
    target_os = "linux",
    target_env = "gnu",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub fn native_backend() -> BoxedPortIo {
    Box::new(ioperm::IopermPorts::new())
}

/// The port backend for the platform this binary was built for.
#[cfg(not(all(
    target_os = "linux",
    target_env = "gnu",
    any(target_arch = "x86", target_arch = "x86_64")
)))]
pub fn native_backend() -> BoxedPortIo {
    Box::new(unsupported::UnsupportedPorts)
}
