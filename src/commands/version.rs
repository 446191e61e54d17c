use std::path::Path;

use anyhow::Result;

use crate::{nbt::load_nbt_file, scoreboard::data_version};

/// Print the resolved schema version of a scoreboard file
pub fn show_data_version(path: &Path) -> Result<()> {
    let root = load_nbt_file(path)?;
    println!("{}", data_version(&root));
    Ok(())
}
