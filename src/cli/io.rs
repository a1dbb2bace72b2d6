//! Input/output helpers for CLI commands
//!
//! Reads from a file or stdin and writes to a file or stdout. File output
//! is written atomically so a failed run never leaves a half-written
//! envelope or plaintext behind.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{SealError, SealResult};

/// Read all bytes from `path`, or from stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> SealResult<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => fs::read(path)
            .map_err(|e| SealError::Io(format!("Failed to read {}: {}", path.display(), e))),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| SealError::Io(format!("Failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}

/// Write `data` to `path`, or to stdout when `path` is `None` or `-`
pub fn write_output(path: Option<&Path>, data: &[u8]) -> SealResult<()> {
    match path {
        Some(path) if path != Path::new("-") => write_atomic(path, data),
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|_| stdout.flush())
                .map_err(|e| SealError::Io(format!("Failed to write stdout: {}", e)))
        }
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temp file gets a unique name beside `path`, is owner-only (0600 on
/// Unix) and is removed if any step before the rename fails.
pub fn write_atomic(path: &Path, data: &[u8]) -> SealResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                SealError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            parent
        }
        _ => Path::new("."),
    };

    // Temp file lives in the same directory so the rename stays atomic
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| SealError::Io(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(data)
        .and_then(|_| temp.flush())
        .map_err(|e| SealError::Io(format!("Failed to write data: {}", e)))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| SealError::Io(format!("Failed to sync data: {}", e)))?;

    temp.persist(path)
        .map_err(|e| SealError::Io(format!("Failed to rename temp file: {}", e.error)))?;

    Ok(())
}

/// Decode text input, trimming surrounding whitespace
pub fn input_text(bytes: &[u8]) -> SealResult<&str> {
    std::str::from_utf8(bytes)
        .map(str::trim)
        .map_err(|_| SealError::InvalidEncoding("input is not valid UTF-8 text".into()))
}
