//! doxbuild - versioned documentation build driver
//!
//! doxbuild drives a Doxygen-style documentation generator: it reads the
//! documented package's version from a marker file, appends it as a
//! `PROJECT_NUMBER` override to a base configuration streamed to the
//! generator on stdin, and links a stable alias to the generated index.

pub mod config;
pub mod doxyfile;
pub mod error;
pub mod fs;
pub mod generator;
pub mod orchestrator;
pub mod version;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, CONFIG_FILE};
pub use doxyfile::compose;
pub use error::{DoxbuildError, DoxbuildResult};
pub use orchestrator::{build, clean, BuildOptions, BuildReport, CleanOptions, CleanReport};
pub use version::read_version;
