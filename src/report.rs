//! Probe report handed to the output formatters.
//!
//! Wraps the raw [`ProbeResult`]s with what the user actually wants to know:
//! which part answered, where its hardware monitor registers live, and
//! whether that matches the chip they expected.

use crate::superio::{ProbeResult, SioChip};
use crate::types::{ChipId, HwmBase, IndexPort};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One found chip, as reported.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Index port the chip answered on.
    pub port: IndexPort,
    /// Raw device ID.
    pub chip_id: ChipId,
    /// Part name, or "unknown".
    pub chip_name: &'static str,
    /// HWM logical device base address.
    pub hwm_base: HwmBase,
    /// HWM index register port (base + 5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hwm_index_port: Option<u16>,
    /// HWM data register port (base + 6).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hwm_data_port: Option<u16>,
}

impl From<ProbeResult> for ReportEntry {
    fn from(result: ProbeResult) -> Self {
        let (hwm_index_port, hwm_data_port) = result.hwm_base.window().unzip();
        Self {
            port: result.port,
            chip_id: result.chip_id,
            chip_name: result.chip().as_str(),
            hwm_base: result.hwm_base,
            hwm_index_port,
            hwm_data_port,
        }
    }
}

impl ReportEntry {
    pub fn chip(&self) -> SioChip {
        SioChip::from_id(self.chip_id)
    }
}

/// How the found chips compare to the expected chip ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// No chip ID was configured.
    NotSet,
    /// A chip in the expected family answered.
    Met,
    /// Chips answered, none of them the expected one.
    Mismatch,
    /// Nothing answered at all.
    NothingFound,
}

/// Result of one probe pass.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// When the probe ran.
    pub probed_at: DateTime<Utc>,
    /// Port backend that performed the I/O.
    pub backend: &'static str,
    /// Index ports tried, in order.
    pub candidates: Vec<IndexPort>,
    /// Chip ID the user expects, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_chip_id: Option<ChipId>,
    /// One entry per port that could be opened.
    pub results: Vec<ReportEntry>,
}

impl ProbeReport {
    /// Start a report for a probe over `candidates`.
    pub fn new(backend: &'static str, candidates: &[IndexPort]) -> Self {
        Self {
            probed_at: Utc::now(),
            backend,
            candidates: candidates.to_vec(),
            expected_chip_id: None,
            results: Vec::new(),
        }
    }

    /// Set the chip ID the report should check for.
    pub fn with_expected(mut self, expected: Option<ChipId>) -> Self {
        self.expected_chip_id = expected;
        self
    }

    /// Attach the probe results.
    pub fn finalize(mut self, results: Vec<ProbeResult>) -> Self {
        self.results = results.into_iter().map(ReportEntry::from).collect();
        self
    }

    /// Compare the found chips against the expected chip ID.
    pub fn expectation(&self) -> Expectation {
        let Some(expected) = self.expected_chip_id else {
            return Expectation::NotSet;
        };
        if self.results.is_empty() {
            Expectation::NothingFound
        } else if self
            .results
            .iter()
            .any(|entry| entry.chip_id.same_family(expected))
        {
            Expectation::Met
        } else {
            Expectation::Mismatch
        }
    }

    /// Get a short summary of the probe.
    pub fn summary(&self) -> String {
        let tried = self
            .candidates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} of {} candidate port(s) answered [{}]",
            self.results.len(),
            self.candidates.len(),
            tried
        )
    }
}
