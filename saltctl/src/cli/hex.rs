use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Args;
use salt::Salt;

use super::Cli;
use crate::report::SaltReport;

/// Build a salt from its raw form written as hex digits and show the
/// selection.
#[derive(Args)]
pub struct HexCommand {
    /// The raw form as hex digits, e.g. `1234`
    raw: String,
}

impl HexCommand {
    pub fn execute(&self, root: &Cli) -> Result<()> {
        let bytes = parse_hex(&self.raw)?;
        let salt = Salt::from_bytes(&bytes)
            .with_context(|| format!("could not build salt from {:?}", self.raw))?;

        let mut stdout = BufWriter::new(anstream::stdout());
        SaltReport::from(salt).write(&mut stdout, root.json)?;
        stdout.flush()?;

        Ok(())
    }
}

/// Decodes hex digits with an optional single `0x` prefix.
fn parse_hex(raw: &str) -> Result<Vec<u8>> {
    hex::decode(raw.strip_prefix("0x").unwrap_or(raw))
        .with_context(|| format!("{raw:?} is not a valid hex string"))
}
