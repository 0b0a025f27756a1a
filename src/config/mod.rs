//! Configuration management for sioprobe.
//!
//! Provides XDG-compliant settings storage: which index ports to probe and
//! which chip the report should expect.

mod settings;

pub use settings::{AppSettings, Paths};
