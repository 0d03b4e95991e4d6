//! Interface-header staging for SDK consumers.
//!
//! Mirrors the engine's public `.h` files into a `headers/` tree under the
//! target root, keeping each file's relative directory layout. Traversal
//! and copy only; no parsing, no rewriting.

use std::fs;
use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::error::PipelineError;

/// Top-level subtrees never staged: build output and the tooling directory.
const EXCLUDED_DIRS: &[&str] = &["build", "tools"];

/// Extension of interface declaration files.
const HEADER_EXT: &str = "h";

/// Staging subdirectory created under the target root.
pub const STAGING_DIR: &str = "headers";

/// Mirror interface headers from `source_root` into `<target_root>/headers/`.
///
/// The staging subdirectory is cleared and recreated first, so stale files
/// from a previous layout never linger. Returns the number of files copied.
pub fn stage(source_root: &Path, target_root: &Path) -> Result<usize, PipelineError> {
    let staging = target_root.join(STAGING_DIR);
    if staging.exists() {
        fs::remove_dir_all(&staging).map_err(|e| {
            PipelineError::io(
                format!("failed to clear staging directory `{}`", staging.display()),
                e,
            )
        })?;
    }
    fs::create_dir_all(&staging).map_err(|e| {
        PipelineError::io(
            format!("failed to create staging directory `{}`", staging.display()),
            e,
        )
    })?;

    let walker = WalkDir::new(source_root).into_iter().filter_entry(|entry| {
        let excluded = entry.depth() == 1
            && entry.file_type().is_dir()
            && EXCLUDED_DIRS
                .iter()
                .any(|dir| entry.file_name().to_string_lossy() == *dir);
        !excluded
    });

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| {
            PipelineError::io(
                format!("failed to walk source tree `{}`", source_root.display()),
                e.into(),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(HEADER_EXT) {
            continue;
        }
        let rel = match entry.path().strip_prefix(source_root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let dest = staging.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PipelineError::io(
                    format!("failed to create directory `{}`", parent.display()),
                    e,
                )
            })?;
        }
        fs::copy(entry.path(), &dest).map_err(|e| {
            PipelineError::io(
                format!(
                    "failed to copy `{}` to `{}`",
                    entry.path().display(),
                    dest.display()
                ),
                e,
            )
        })?;
        copied += 1;
    }

    info!("staged {} headers into {}", copied, staging.display());
    Ok(copied)
}
