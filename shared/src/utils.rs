use anyhow::{bail, Context};
use crate::types::Result;
use std::path::Path;

/// Largest upload the server accepts (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub fn is_supported_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    matches!(ext.as_str(), "pdf" | "xlsx" | "json" | "txt")
}

/// Checks an upload candidate before anything is sent.
pub fn check_upload(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a file", path.display());
    }
    if !is_supported_file(path) {
        bail!("File type not allowed");
    }
    if meta.len() > MAX_UPLOAD_BYTES {
        bail!("File is larger than 16 MB");
    }
    Ok(())
}
