//! Core type definitions using newtype patterns for type safety.
//!
//! Raw `u16` values for ports, IDs and base addresses are easy to mix up;
//! each gets its own type here.

mod chip_id;
mod hex;
mod hwm_base;
mod index_port;

pub use chip_id::ChipId;
pub use hwm_base::HwmBase;
pub use index_port::{IndexPort, IndexPortError};
