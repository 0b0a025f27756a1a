//! Candidate port probing.
//!
//! Walks the candidate index ports in order, opens a session on every port
//! the environment grants, and reads the chip ID and the hardware monitor
//! base. Ports that are refused are skipped; that is the normal outcome on
//! boards whose firmware reserves the Super I/O range.

use crate::error::AccessResult;
use crate::superio::registers::{
    CR_BASE_HIGH, CR_BASE_LOW, CR_CHIP_ID_HIGH, CR_CHIP_ID_LOW, LDN_HWM,
};
use crate::superio::{PortIo, SioChip, SioSession};
use crate::types::{ChipId, HwmBase, IndexPort};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// A chip that answered on one candidate index port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Index port the chip answered on.
    pub port: IndexPort,
    /// Raw device ID from CR 0x20/0x21.
    pub chip_id: ChipId,
    /// HWM logical device base from CR 0x60/0x61.
    pub hwm_base: HwmBase,
}

impl ProbeResult {
    pub fn new(port: IndexPort, chip_id: ChipId, hwm_base: HwmBase) -> Self {
        Self {
            port,
            chip_id,
            hwm_base,
        }
    }

    /// Identify the part from its device ID.
    pub fn chip(&self) -> SioChip {
        SioChip::from_id(self.chip_id)
    }
}

/// Probe a single index port.
///
/// # Errors
/// Returns the denial if the port pair could not be acquired. No register is
/// touched in that case.
pub fn probe_port<P: PortIo + ?Sized>(io: &mut P, port: IndexPort) -> AccessResult<ProbeResult> {
    let mut session = SioSession::acquire(io, port)?;

    let chip_id = ChipId::new(session.read_config_word(CR_CHIP_ID_HIGH, CR_CHIP_ID_LOW));
    session.select_logical_device(LDN_HWM);
    let hwm_base = HwmBase::new(session.read_config_word(CR_BASE_HIGH, CR_BASE_LOW));

    session.release();
    Ok(ProbeResult::new(port, chip_id, hwm_base))
}

/// Probe every candidate in order and collect the ports that answered.
///
/// Never fails: refused ports are logged at debug level and skipped. Each
/// port is tried at most once per pass, whatever happened the first time.
pub fn probe_candidates<P: PortIo + ?Sized>(
    io: &mut P,
    candidates: &[IndexPort],
) -> Vec<ProbeResult> {
    let mut found = Vec::with_capacity(candidates.len());
    let mut tried = HashSet::with_capacity(candidates.len());

    for &port in candidates {
        if !tried.insert(port) {
            debug!(port = %port, "already tried in this pass");
            continue;
        }

        match probe_port(io, port) {
            Ok(result) => {
                info!(
                    port = %result.port,
                    chip_id = %result.chip_id,
                    hwm_base = %result.hwm_base,
                    "Super I/O chip found"
                );
                found.push(result);
            }
            Err(e) => {
                debug!(port = %port, error = %e, "skipping candidate");
            }
        }
    }

    found
}
