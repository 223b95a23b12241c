//! Reading and writing the target .env file.
//!
//! The format is deliberately small: one `KEY=VALUE` per line, `#` at the
//! very start of a line marks a comment, and the value is everything after
//! the first `=`, verbatim. There is no trimming, unquoting or escaping.
//!
//! The file must be UTF-8. Anything else is rejected with
//! `StoreError::InvalidUtf8` rather than rewritten lossily.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::constants::{COMMENT_PREFIX, PATH_PREFIX};
use crate::core::types::EnvMap;
use crate::error::{Result, StoreError};

/// Load the env file at `path` into an [`EnvMap`].
///
/// A missing file is created empty first, so the path is guaranteed to exist
/// once this returns.
///
/// # Errors
///
/// Returns `StoreError::Create` if the missing file cannot be created,
/// `StoreError::Read` if it cannot be read and `StoreError::InvalidUtf8` if
/// it is not UTF-8.
pub fn load(path: &Path) -> Result<EnvMap> {
    if !path.exists() {
        debug!(path = %path.display(), "creating empty env file");
        open_for_write(path).map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let bytes = std::fs::read(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = String::from_utf8(bytes).map_err(|_| StoreError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    let env = parse(&contents);

    debug!(path = %path.display(), keys = env.len(), "env file loaded");
    Ok(env)
}

/// Parse env file contents.
///
/// Repeated keys keep the value of the last line.
pub fn parse(contents: &str) -> EnvMap {
    contents
        .lines()
        .filter_map(parse_line)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Split one line into key and raw value.
///
/// Returns `None` for comment lines. A line without `=` is all key with an
/// empty value, so a blank line yields an empty key.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    Some(line.split_once('=').unwrap_or((line, "")))
}

/// Render the map as `KEY=VALUE` lines, sorted by key.
///
/// Entries with an empty key are dropped.
pub fn serialize(env: &EnvMap) -> Vec<String> {
    env.iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| format_line(key, value))
        .collect()
}

/// Format a single entry.
///
/// Path-like values (leading `/`) are written bare, everything else is
/// wrapped in double quotes. Embedded quotes and newlines are not escaped.
pub fn format_line(key: &str, value: &str) -> String {
    if value.starts_with(PATH_PREFIX) {
        format!("{}={}", key, value)
    } else {
        format!("{}=\"{}\"", key, value)
    }
}

/// Replace the file at `path` with `lines`, one per line.
///
/// # Errors
///
/// Returns `StoreError::Write` if the file cannot be truncated, written or
/// flushed.
pub fn write(path: &Path, lines: &[String]) -> Result<()> {
    let to_store_error = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = open_for_write(path).map_err(to_store_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(to_store_error)?;
    }
    writer.flush().map_err(to_store_error)?;

    debug!(path = %path.display(), lines = lines.len(), "env file written");
    Ok(())
}

/// Open `path` truncated, creating it owner-only on Unix.
fn open_for_write(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}
