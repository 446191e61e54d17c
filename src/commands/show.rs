use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::render_output;
use crate::{nbt::load_nbt_file, scoreboard::ParserRegistry};

/// Write the extraction result for a single file to stdout. A parse
/// failure still prints the contract's error object.
pub fn show_file(registry: &ParserRegistry, path: &Path) -> Result<()> {
    let result = load_nbt_file(path).and_then(|root| registry.parse_scoreboards(&root));
    let json = render_output(result)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    stdout
        .write_all(json.as_bytes())
        .context("Failed to write to stdout")?;
    stdout
        .write_all(b"\n")
        .context("Failed to write to stdout")?;

    stdout.flush().context("Failed to flush stdout")
}
