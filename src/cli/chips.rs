//! Chips subcommand implementation.
//!
//! Handles `sioprobe chips`, listing the device IDs sioprobe can name.

use crate::error::CliResult;
use crate::superio::KNOWN_CHIPS;
use crate::types::ChipId;
use clap::Parser;
use console::style;
use std::io::{self, Write};

/// List known chip IDs.
#[derive(Parser, Debug, Default)]
pub struct ChipsCommand {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl ChipsCommand {
    /// Execute the chips command.
    pub fn execute(&self) -> CliResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out)
    }

    fn write<W: Write>(&self, out: &mut W) -> CliResult<()> {
        if self.json {
            let table: Vec<_> = KNOWN_CHIPS
                .iter()
                .map(|(chip, id)| {
                    serde_json::json!({ "chip_id": ChipId::new(*id), "name": chip.as_str() })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
            return Ok(());
        }

        writeln!(out, "  {:<8}  {}", style("ID").bold(), style("CHIP").bold())?;
        for (chip, id) in KNOWN_CHIPS {
            writeln!(out, "  {:<8}  {}", ChipId::new(*id), chip)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "  {}",
            style(format!(
                "IDs match with the low three (revision) bits ignored, mask {:#06X}.",
                ChipId::FAMILY_MASK
            ))
            .dim()
        )?;
        Ok(())
    }
}
