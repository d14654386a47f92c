use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Args;
use salt::Salt;

use super::Cli;
use crate::report::SaltReport;

/// Decode a salt from its base64 text form and show the selection.
#[derive(Args)]
pub struct DecodeCommand {
    /// The unpadded base64 text form, e.g. `EjQ`
    text: String,
}

impl DecodeCommand {
    pub fn execute(&self, root: &Cli) -> Result<()> {
        let salt = Salt::from_base64(&self.text)
            .with_context(|| format!("could not decode salt {:?}", self.text))?;

        let mut stdout = BufWriter::new(anstream::stdout());
        SaltReport::from(salt).write(&mut stdout, root.json)?;
        stdout.flush()?;

        Ok(())
    }
}
