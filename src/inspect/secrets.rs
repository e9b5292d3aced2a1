//! Secret mount enumeration.
//!
//! Secrets follow the volume-mount convention: one subdirectory per secret
//! under the root, where the directory name is the secret name and the
//! contents of a file inside are the value.
//!
//! # Design Decisions
//! - Only the root listing can fail; the caller decides how to surface that
//! - Within a secret directory, the lexicographically first regular file is
//!   the value (deterministic when a mount carries several files)
//! - Entries that are not directories are skipped
//! - Unreadable secret directories are skipped and logged at debug level
//! - Results are sorted by name so responses are stable across requests

use std::fs;
use std::io;
use std::path::Path;

/// One secret: the mount directory's name and its file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub name: String,
    pub value: String,
}

/// Read all secrets under `root`.
pub fn read_all(root: &Path) -> io::Result<Vec<Secret>> {
    let mut secrets = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match read_value(&entry.path()) {
            Some(value) => secrets.push(Secret { name, value }),
            None => tracing::debug!(secret = %name, "no readable file in secret directory"),
        }
    }

    secrets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(secrets)
}

/// Pick the lexicographically first regular file in `dir` and read it.
///
/// Symlinks are followed here: orchestrators project secret files as
/// symlinks into a data directory.
fn read_value(dir: &Path) -> Option<String> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let first = files.into_iter().next()?;
    let bytes = fs::read(first).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
