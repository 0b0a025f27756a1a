//! # sioprobe - Super I/O chip identifier and HWM base locator
//!
//! sioprobe talks to the Super I/O controller found on most PC motherboards
//! through its index/data port pair, identifies the chip from its device ID
//! and reports where the hardware monitor logical device has been mapped.
//! It is a ground-truth check that the chip is reachable before handing fan
//! and sensor work to a kernel driver.
//!
//! ## Protocol
//!
//! 1. Acquire the index port and `index + 1` from the OS (`ioperm(2)`)
//! 2. Enter Extended Function Mode: write `0x87` twice to the index port
//! 3. Read the device ID from CR `0x20` (high) and CR `0x21` (low)
//! 4. Select logical device `0x0B` (hardware monitor) through CR `0x07`
//! 5. Read its I/O base from CR `0x60` (high) and CR `0x61` (low)
//! 6. Leave Extended Function Mode: write `0xAA` to the index port
//!
//! Ports the OS refuses, usually because ACPI firmware claims them, are
//! skipped without error.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sioprobe::superio::{native_backend, probe_candidates};
//! use sioprobe::types::IndexPort;
//!
//! let mut io = native_backend();
//! for found in probe_candidates(&mut *io, &IndexPort::DEFAULT_CANDIDATES) {
//!     println!("{} at {}: HWM base {}", found.chip(), found.port, found.hwm_base);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Newtypes for index ports, chip IDs and base addresses
//! - [`superio`] - Port backends, the register session and the probe policy
//! - [`report`] - Probe report with chip names and expectation checks
//! - [`config`] - Settings file management
//! - [`output`] - Plain, JSON and CSV formatters
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod superio;
pub mod types;

// Re-export commonly used types
pub use error::{AccessError, CliError, ConfigError};
pub use report::ProbeReport;
pub use superio::{probe_candidates, PortIo, ProbeResult, SioChip, SioSession};
pub use types::{ChipId, HwmBase, IndexPort};
