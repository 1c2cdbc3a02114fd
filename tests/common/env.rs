//! Test environment builder for isolated doxbuild testing.
//!
//! Provides `TestEnv` - an isolated temp directory standing in for the
//! invocation directory, a second temp directory standing in for the
//! documented package, and helpers to run the doxbuild CLI against them.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a doxbuild CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - An isolated docs directory (the CLI's working directory)
/// - An isolated project directory (holds the version marker)
/// - CLI command execution helpers
pub struct TestEnv {
    /// Temporary directory the CLI runs in (Doxyfile, output, alias)
    pub docs_root: TempDir,
    /// Temporary directory of the documented package (VERSION marker)
    pub project_dir: TempDir,
    /// Path to the doxbuild binary
    doxbuild_bin: PathBuf,
}

impl TestEnv {
    /// Create a fresh environment with no files in it
    pub fn new() -> Self {
        Self {
            docs_root: TempDir::new().expect("Failed to create docs temp dir"),
            project_dir: TempDir::new().expect("Failed to create project temp dir"),
            doxbuild_bin: Self::find_doxbuild_binary(),
        }
    }

    /// Get path relative to the docs directory
    pub fn docs_path(&self, relative: &str) -> PathBuf {
        self.docs_root.path().join(relative)
    }

    /// Write a file into the docs directory
    pub fn write_docs_file(&self, relative: &str, content: &str) {
        let full_path = self.docs_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the version marker into the project directory
    pub fn write_version(&self, content: &str) {
        std::fs::write(self.project_dir.path().join("VERSION"), content)
            .expect("Failed to write VERSION");
    }

    /// Install an executable stub generator script and point doxbuild.toml
    /// at it.
    #[cfg(unix)]
    pub fn install_stub_generator(&self, script_body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let stub = self.docs_path("stub-generator.sh");
        std::fs::write(&stub, format!("#!/bin/sh\n{script_body}")).expect("Failed to write stub");
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");

        self.write_docs_file(
            "doxbuild.toml",
            &format!("[generator]\nprogram = \"{}\"\n", stub.display()),
        );
    }

    /// Run doxbuild in the docs directory without a project environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run doxbuild with DOXBUILD_PROJECT_DIR pointing at the project dir
    pub fn run_with_project_env(&self, args: &[&str]) -> TestResult {
        let project = self.project_dir.path().display().to_string();
        self.run_with_env(args, &[("DOXBUILD_PROJECT_DIR", project.as_str())])
    }

    /// Run doxbuild with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.doxbuild_bin);
        cmd.current_dir(self.docs_root.path())
            .args(args)
            .env_remove("DOXBUILD_PROJECT_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute doxbuild");

        Self::output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Path of the alias in the docs directory
    pub fn alias_path(&self) -> PathBuf {
        self.docs_path("index.html")
    }

    /// True if anything (including a dangling symlink) sits at the alias path
    pub fn alias_exists(&self) -> bool {
        self.alias_path().symlink_metadata().is_ok()
    }

    /// Find the doxbuild binary to use for testing
    fn find_doxbuild_binary() -> PathBuf {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());

        let debug_bin = PathBuf::from(&manifest_dir).join("target/debug/doxbuild");
        if debug_bin.exists() {
            return debug_bin;
        }

        let release_bin = PathBuf::from(&manifest_dir).join("target/release/doxbuild");
        if release_bin.exists() {
            return release_bin;
        }

        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("target")
            .join("debug")
            .join("doxbuild")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A ready-to-build environment: Doxyfile, VERSION, and a stub generator
/// that emits `html/index.html` and records the stream it was fed.
#[cfg(unix)]
#[allow(dead_code)]
pub fn buildable_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_docs_file("Doxyfile", "OUTPUT_DIRECTORY=html\nGENERATE_LATEX=NO\n");
    env.write_version("3.3.0\n");
    env.install_stub_generator(
        "mkdir -p html\ncat > html/doxyfile.captured\ncp html/doxyfile.captured html/index.html\n",
    );
    env
}
