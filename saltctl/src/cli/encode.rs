use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Args;
use salt::Salt;
use serde_json::json;

use super::Cli;

/// Build a salt from four selected slots and print its base64 text form.
#[derive(Args)]
pub struct EncodeCommand {
    /// The 1-based slots (1-16) in the order they were selected
    #[arg(num_args = 4, required = true, value_name = "SLOT")]
    slots: Vec<usize>,
}

impl EncodeCommand {
    pub fn execute(&self, root: &Cli) -> Result<()> {
        let slots = <[usize; salt::SELECTIONS]>::try_from(self.slots.as_slice())
            .context("exactly four slots are required")?;
        let salt = Salt::from_slots(slots).context("could not build salt")?;
        tracing::debug!(?slots, %salt, "encoded salt");

        let mut stdout = BufWriter::new(anstream::stdout());
        write_encoded(&mut stdout, salt, root.json)?;
        stdout.flush()?;

        Ok(())
    }
}

fn write_encoded(out: &mut impl Write, salt: Salt, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", json!({ "base64": salt, "bytes": salt.to_bytes() }))?;
    } else {
        writeln!(out, "{salt}")?;
    }

    Ok(())
}
