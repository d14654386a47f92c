//! Renders a salt for humans and machines.

use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use owo_colors::OwoColorize;
use salt::{SLOTS, Salt, nibble::U4};
use serde::Serialize;
use serde_json::json;

/// The amount of slots per row of the rendered grid.
const GRID_WIDTH: usize = 4;

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SaltReport {
    pub base64: Salt,
    pub bytes: [u8; salt::RAW_LENGTH],
    pub nibbles: [U4; salt::SELECTIONS],
    pub slots: Vec<SlotReport>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SlotReport {
    pub index: usize,
    pub show: bool,
    pub number: String,
}

impl From<Salt> for SaltReport {
    fn from(salt: Salt) -> Self {
        Self {
            base64: salt,
            bytes: salt.to_bytes(),
            nibbles: salt.nibbles(),
            slots: (1..=SLOTS)
                .map(|index| SlotReport {
                    index,
                    show: salt.show(index),
                    number: salt.number(index),
                })
                .collect(),
        }
    }
}

impl SaltReport {
    pub fn write(&self, out: &mut impl Write, json: bool) -> Result<()> {
        if json {
            writeln!(out, "{}", json!(self))?;
            return Ok(());
        }

        writeln!(out, "{}: {}", "SALT".bright_black(), self.base64.bright_blue())?;
        writeln!(
            out,
            "{}: {}",
            "BYTES".bright_black(),
            self.bytes.iter().map(|byte| format!("{byte:#04x}")).join(" ")
        )?;
        writeln!(
            out,
            "{}: {}",
            "NIBBLES".bright_black(),
            self.nibbles.iter().join(" ")
        )?;
        writeln!(
            out,
            "{}: {}",
            "ORDER".bright_black(),
            self.base64.selected_slots().join(" → ")
        )?;
        writeln!(out)?;

        for row in &self.slots.iter().chunks(GRID_WIDTH) {
            let cells = row
                .map(|slot| {
                    let cell = format!("{:^5}", slot.number);
                    if slot.show {
                        cell.green().bold().to_string()
                    } else {
                        format!("{:^5}", "·").bright_black().to_string()
                    }
                })
                .join("│");
            writeln!(out, " {cells}")?;
        }

        Ok(())
    }
}
