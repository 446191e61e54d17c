use std::{
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use rayon::prelude::*;

use super::render_output;
use crate::{nbt::load_nbt_file, scoreboard::ParserRegistry, verbose};

fn process_file(registry: &ParserRegistry, path: &Path, output_folder: &Path) -> Result<PathBuf> {
    // Parse failures still produce contract output; only I/O can fail here
    let result = load_nbt_file(path).and_then(|root| registry.parse_scoreboards(&root));
    let json = render_output(result)?;

    let stem = path.file_stem().context("Input file has no name")?;
    let output_path = output_folder.join(stem).with_extension("json");
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    Ok(output_path)
}

/// Extract every matched scoreboard file into `<output_folder>/<stem>.json`.
/// Each file is an independent parse, so the batch runs in parallel; a
/// failed file is reported and skipped, never aborting the rest.
pub fn dump_scoreboards(
    registry: &ParserRegistry,
    patterns: &[String],
    output_folder: &Path,
) -> Result<()> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matches =
            glob(pattern).with_context(|| format!("Invalid glob pattern {:?}", pattern))?;
        for entry in matches {
            paths.push(entry.context("Failed to read glob entry")?);
        }
    }

    create_dir_all(output_folder).context("Failed to create output dirs")?;

    paths
        .par_iter()
        .map(|path| -> Result<_> {
            let output_path = process_file(registry, path, output_folder)
                .with_context(|| format!("Failed to process file: {:?}", path))?;
            Ok((path, output_path))
        })
        // Report results
        .for_each(|result| match result {
            Ok((path, output_path)) => {
                eprintln!("Extracted scoreboard: {:?} -> {:?}", path, output_path);
            }
            Err(e) => {
                let error_message = if verbose() {
                    format!("{e:?}")
                } else {
                    format!("{e}")
                };
                eprintln!("Failed to extract scoreboard: {error_message}");
            }
        });

    Ok(())
}
