use crate::config::SkeletonConfig;
use crate::error::{Result, SkeletonError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The input path with its extension replaced by the configured one.
pub(crate) fn output_path(input: &Path, config: &SkeletonConfig) -> PathBuf {
    input.with_extension(&config.output_extension)
}

/// Write `contents` to `path` through a temporary file in the same directory,
/// so `path` is either fully written or left untouched.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let output_error = |source: io::Error| SkeletonError::OutputError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(directory).map_err(output_error)?;
    file.write_all(contents.as_bytes()).map_err(output_error)?;
    file.flush().map_err(output_error)?;
    file.as_file().sync_all().map_err(output_error)?;
    file.persist(path).map_err(|err| output_error(err.error))?;

    Ok(())
}
