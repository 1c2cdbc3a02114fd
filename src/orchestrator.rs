//! The build/clean operation pair.
//!
//! `build` is a single linear pipeline: read the version marker, read the
//! base configuration, compose the override stream, run the generator, and
//! link the alias to the emitted index. `clean` undoes the filesystem side
//! effects. Neither operation keeps state between invocations; whatever is
//! on disk is the state.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::doxyfile;
use crate::error::{DoxbuildError, DoxbuildResult};
use crate::fs;
use crate::generator;
use crate::version;

/// Options for the build operation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Read inputs and check preconditions, but mutate nothing.
    pub dry_run: bool,
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Version string taken from the marker file
    pub version: String,
    /// The composed configuration stream fed to the generator
    pub composed: String,
    /// Generator stdout, captured for verbose echo (empty on dry-run)
    pub generator_stdout: String,
    /// Directory the generator emitted into
    pub output_dir: PathBuf,
    /// Alias created on success (`None` on dry-run)
    pub alias: Option<PathBuf>,
}

/// Options for the clean operation.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// List removal targets without removing them.
    pub dry_run: bool,
}

/// What a clean removed (or, under dry-run, would remove).
#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Run one documentation build.
///
/// No filesystem mutation happens before the generator is spawned, so a
/// failure while gathering inputs leaves the tree exactly as it was. The
/// alias is only linked after the generator exits 0; a nonzero exit may
/// leave a partially populated output directory behind for `clean`.
pub fn build(
    config: &Config,
    project_dir: &Path,
    options: &BuildOptions,
) -> DoxbuildResult<BuildReport> {
    let version = version::read_version(project_dir, &config.project.version_file)?;

    let base_path = &config.generator.base_config;
    let base =
        std::fs::read_to_string(base_path).map_err(|source| DoxbuildError::MissingInput {
            path: base_path.clone(),
            source,
        })?;

    let alias_path = &config.output.alias;
    if alias_path.symlink_metadata().is_ok() {
        return Err(DoxbuildError::AliasConflict {
            path: alias_path.clone(),
        });
    }

    let composed = doxyfile::compose(&base, &version);

    if options.dry_run {
        return Ok(BuildReport {
            version,
            composed,
            generator_stdout: String::new(),
            output_dir: config.output.dir.clone(),
            alias: None,
        });
    }

    let output = generator::run_generator(&config.generator.program, &composed)?;

    fs::create_alias(alias_path, &config.index_target())?;

    Ok(BuildReport {
        version,
        composed,
        generator_stdout: output.stdout,
        output_dir: config.output.dir.clone(),
        alias: Some(alias_path.clone()),
    })
}

/// Remove the generated output directory and the alias.
///
/// Missing targets are fine (clean is idempotent); any other removal error
/// is collected, and both targets are always attempted before reporting.
pub fn clean(config: &Config, options: &CleanOptions) -> DoxbuildResult<CleanReport> {
    let mut report = CleanReport::default();

    if options.dry_run {
        if config.output.dir.symlink_metadata().is_ok() {
            report.removed.push(config.output.dir.clone());
        }
        if config.output.alias.symlink_metadata().is_ok() {
            report.removed.push(config.output.alias.clone());
        }
        return Ok(report);
    }

    let mut failures = Vec::new();

    match fs::remove_tree(&config.output.dir) {
        Ok(true) => report.removed.push(config.output.dir.clone()),
        Ok(false) => {}
        Err(err) => failures.push(format!("{}: {}", config.output.dir.display(), err)),
    }

    match fs::remove_link(&config.output.alias) {
        Ok(true) => report.removed.push(config.output.alias.clone()),
        Ok(false) => {}
        Err(err) => failures.push(format!("{}: {}", config.output.alias.display(), err)),
    }

    if !failures.is_empty() {
        return Err(DoxbuildError::CleanupFailed { failures });
    }

    Ok(report)
}
