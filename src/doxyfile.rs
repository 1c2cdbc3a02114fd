//! Composition of the generator configuration stream.
//!
//! The stream handed to the generator is the base configuration verbatim
//! plus one `PROJECT_NUMBER=<version>` override line. The generator's
//! line-oriented `KEY=VALUE` syntax with last-occurrence-wins parsing is an
//! external contract; nothing here deduplicates or reorders keys.

/// Configuration key overridden with the marker file's version.
pub const VERSION_KEY: &str = "PROJECT_NUMBER";

/// Compose the transient configuration stream for one build.
///
/// The base bytes pass through untouched. If the base is non-empty and not
/// newline-terminated, a single newline is inserted so the override is
/// always a line of its own.
pub fn compose(base: &str, version: &str) -> String {
    let mut stream = String::with_capacity(base.len() + VERSION_KEY.len() + version.len() + 2);
    stream.push_str(base);
    if !base.is_empty() && !base.ends_with('\n') {
        stream.push('\n');
    }
    stream.push_str(VERSION_KEY);
    stream.push('=');
    stream.push_str(version);
    stream.push('\n');
    stream
}
