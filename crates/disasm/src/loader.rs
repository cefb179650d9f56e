use std::fs;
use std::path::Path;

use log::debug;

use crate::common::error::LoadError;

pub const WORD_BYTES: usize = 4;

pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("[Loader] read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Big-endian 32-bit words in `bytes`, in order.
///
/// A trailing group shorter than four bytes is dropped.
pub fn words(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    let chunks = bytes.chunks_exact(WORD_BYTES);
    let dropped = chunks.remainder().len();
    if dropped != 0 {
        debug!("[Loader] ignoring {} trailing byte(s)", dropped);
    }
    chunks.map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
}
