//! External documentation generator invocation.
//!
//! The generator is an opaque executable that reads its configuration on
//! stdin and exits 0 on success. Invocation is a synchronous spawn/wait
//! with piped stdin; there is no timeout.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{DoxbuildError, DoxbuildResult};

/// Output captured from a successful generator run.
#[derive(Debug)]
pub struct GeneratorOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run the generator, feeding `config_stream` on stdin, and wait for exit.
///
/// The conventional `-` argument tells Doxygen-style generators to read
/// their configuration from stdin.
pub fn run_generator(program: &str, config_stream: &str) -> DoxbuildResult<GeneratorOutput> {
    let mut child = Command::new(program)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| DoxbuildError::GeneratorLaunch {
            program: program.to_string(),
            source,
        })?;

    if let Some(stdin) = child.stdin.as_mut() {
        // A generator that dies before draining stdin surfaces as a broken
        // pipe here; the exit status below is the error worth reporting.
        if let Err(err) = stdin.write_all(config_stream.as_bytes()) {
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }
    }
    // Dropping the handle closes the pipe so the generator sees EOF.
    drop(child.stdin.take());

    let output = child.wait_with_output()?;

    if !output.status.success() {
        return Err(DoxbuildError::GeneratorExit {
            program: program.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(GeneratorOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
