use std::{fs, io::Read, path::Path};

use anyhow::{anyhow, Context, Result};
use bytes::Bytes;
use flate2::read::{GzDecoder, ZlibDecoder};

pub mod parser;
pub mod types;

use parser::parse_nbt_root;
pub use types::{Tag, Value};

/// Unwrap the compression container around an NBT document. Scoreboard
/// files are normally gzip'd, but zlib and uncompressed files exist too.
pub fn decompress(bytes: &[u8]) -> Result<Bytes> {
    match bytes {
        [0x1f, 0x8b, ..] => {
            let mut data = Vec::new();
            GzDecoder::new(bytes)
                .read_to_end(&mut data)
                .context("Failed to decompress gzip container")?;
            Ok(Bytes::from(data))
        }
        [0x78, ..] => {
            let mut data = Vec::new();
            ZlibDecoder::new(bytes)
                .read_to_end(&mut data)
                .context("Failed to decompress zlib container")?;
            Ok(Bytes::from(data))
        }
        _ => Ok(Bytes::copy_from_slice(bytes)),
    }
}

/// Decode a binary NBT blob into a value tree
pub fn parse_nbt_bytes(bytes: &[u8]) -> Result<Value> {
    let content = decompress(bytes)?;
    let (_, root) =
        parse_nbt_root(&content).map_err(|e| anyhow!("Failed to parse NBT data: {:?}", e))?;
    Ok(root)
}

/// Load an NBT file from disk
pub fn load_nbt_file(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file {:?}", path))?;
    parse_nbt_bytes(&bytes).with_context(|| format!("Failed to decode file {:?}", path))
}
