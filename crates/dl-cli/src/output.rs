use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::commands::CliError;

pub fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `text` atomically.
///
/// The text goes to a temporary file next to the destination and is renamed
/// over it only once fully written, so readers never see a partial list.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let write_err = |source: io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = output_dir(path);
    fs::create_dir_all(&dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;

    // Temporary files are created owner-only; keep the mode of the list being replaced
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(file.path(), meta.permissions()).map_err(write_err)?;
    }

    file.persist(path).map_err(|e| write_err(e.error))?;
    log::debug!("wrote {} bytes to '{}'", text.len(), path.display());
    Ok(())
}

fn output_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
