use crate::error::CsResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a chat export whole. A leading UTF-8 byte-order mark is dropped.
pub fn load_transcript<P: AsRef<Path>>(path: P) -> CsResult<String> {
    let path = path.as_ref();
    info!("📂 Loading transcript: {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
