//! Filesystem primitives for the output tree.
//!
//! Thin wrappers over `std::fs` that encode the two rules the output tree
//! lives by: the alias is only ever created fresh, and removals treat a
//! missing target as already done.

use std::io;
use std::path::Path;

use crate::error::{DoxbuildError, DoxbuildResult};

/// Create the output alias as a symbolic link pointing at `target`.
///
/// Fails with `AliasConflict` if anything already exists at `link`,
/// including a dangling symlink left behind by an interrupted run.
pub fn create_alias(link: &Path, target: &Path) -> DoxbuildResult<()> {
    if link.symlink_metadata().is_ok() {
        return Err(DoxbuildError::AliasConflict {
            path: link.to_path_buf(),
        });
    }

    symlink(target, link)?;
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

// Windows has no `ln -s`; a file symlink is the closest equivalent and
// needs either developer mode or elevation.
#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Recursively remove a directory tree.
///
/// Returns `Ok(true)` if something was removed, `Ok(false)` if the path
/// did not exist.
pub fn remove_tree(path: &Path) -> io::Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Remove a symlink (or plain file) without following it.
///
/// Returns `Ok(true)` if something was removed, `Ok(false)` if the path
/// did not exist.
pub fn remove_link(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
