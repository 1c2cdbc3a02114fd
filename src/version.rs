//! Version marker lookup.
//!
//! The documented package maintains its version as the sole content of a
//! marker file beneath the project directory. Reading it is the only thing
//! doxbuild knows about that package.

use std::io;
use std::path::Path;

use crate::error::{DoxbuildError, DoxbuildResult};

/// Read the version string from the marker file under `project_dir`.
///
/// The entire file content is the version; trailing whitespace and the
/// final newline are trimmed. An empty marker is treated the same as an
/// unreadable one.
pub fn read_version(project_dir: &Path, version_file: &Path) -> DoxbuildResult<String> {
    let path = project_dir.join(version_file);

    let raw = std::fs::read_to_string(&path).map_err(|source| DoxbuildError::MissingInput {
        path: path.clone(),
        source,
    })?;

    let version = raw.trim_end().to_string();
    if version.is_empty() {
        return Err(DoxbuildError::MissingInput {
            path,
            source: io::Error::new(io::ErrorKind::InvalidData, "version marker is empty"),
        });
    }

    Ok(version)
}
