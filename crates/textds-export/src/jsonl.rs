use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use textds_core::{sha256_hex, Record, Result};

/// Write bytes to a sibling temp file, then rename into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = sibling(path, ".tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Write records as one JSON object per line.
pub fn write_jsonl(path: &Path, records: &[Record]) -> Result<()> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    write_atomic(path, out.as_bytes())
}

/// Write a `.sha256` sidecar for an existing file.
///
/// Line format is `<digest>  <filename>`, the same two-space layout
/// `sha256sum` emits, so the sidecar verifies with standard tooling.
pub fn write_checksum(path: &Path) -> Result<PathBuf> {
    let bytes = fs::read(path)?;
    let digest = sha256_hex(&bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let sidecar = sibling(path, ".sha256");
    write_atomic(&sidecar, format!("{}  {}\n", digest, name).as_bytes())?;
    Ok(sidecar)
}

/// Pretty-printed JSON with a trailing newline.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
