//! Shader group discovery and stale artifact cleanup.
//!
//! A shader group is an immediate subdirectory of the shaders root (one per
//! material or pass). Groups and the files inside them are sorted by name:
//! directory-listing order is not stable across filesystems and the emitted
//! header must be byte-identical across runs on an unchanged tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{self, Classification, Dialect, Stage, ARTIFACT_MARKER};
use crate::error::PipelineError;

/// Reserved include directory under the shaders root; never a group.
pub const SHARED_INCLUDE_DIR: &str = "shared";

/// One classified shader source file.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub path: PathBuf,
    pub file_name: String,
    pub dialect: Dialect,
    pub stage: Stage,
}

/// A directory-scoped collection of shader sources compiled together.
#[derive(Debug)]
pub struct ShaderGroup {
    pub name: String,
    pub path: PathBuf,
    pub sources: Vec<ShaderSource>,
}

/// Enumerate shader groups under `shaders_root`, classifying every filename.
///
/// Groups are sorted by name, sources within a group by filename. A file
/// with a dialect marker but no stage token aborts discovery.
pub fn discover(shaders_root: &Path) -> Result<Vec<ShaderGroup>, PipelineError> {
    let entries = fs::read_dir(shaders_root).map_err(|e| {
        PipelineError::io(
            format!("failed to read shaders root `{}`", shaders_root.display()),
            e,
        )
    })?;

    let mut groups = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PipelineError::io(
                format!("failed to read shaders root `{}`", shaders_root.display()),
                e,
            )
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == SHARED_INCLUDE_DIR {
            continue;
        }
        let sources = collect_sources(&path, &name)?;
        groups.push(ShaderGroup {
            name,
            path,
            sources,
        });
    }

    groups.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(groups)
}

fn collect_sources(group_dir: &Path, group_name: &str) -> Result<Vec<ShaderSource>, PipelineError> {
    let entries = fs::read_dir(group_dir).map_err(|e| {
        PipelineError::io(
            format!("failed to read shader group `{}`", group_dir.display()),
            e,
        )
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PipelineError::io(
                format!("failed to read shader group `{}`", group_dir.display()),
                e,
            )
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        match classify::classify(&file_name) {
            Classification::Source { dialect, stage } => sources.push(ShaderSource {
                path,
                file_name,
                dialect,
                stage,
            }),
            Classification::NotAShader => {}
            Classification::UnknownStage => {
                return Err(PipelineError::UnsupportedShaderStage {
                    group: group_name.to_string(),
                    file: file_name,
                });
            }
        }
    }

    sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(sources)
}

/// Delete every leftover bytecode artifact in the group directory.
///
/// Idempotent; running on an already-clean group is a no-op. Only called
/// once the toolchain is known to be available, so an unviable run never
/// deletes anything.
pub fn clean_stale_artifacts(group: &ShaderGroup) -> Result<(), PipelineError> {
    let entries = fs::read_dir(&group.path).map_err(|e| {
        PipelineError::io(
            format!("failed to read shader group `{}`", group.path.display()),
            e,
        )
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            PipelineError::io(
                format!("failed to read shader group `{}`", group.path.display()),
                e,
            )
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(ARTIFACT_MARKER) {
            fs::remove_file(&path).map_err(|e| {
                PipelineError::io(
                    format!("failed to delete stale artifact `{}`", path.display()),
                    e,
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_discover_sorts_groups_and_sources() {
        let root = tempfile::tempdir().unwrap();
        for group in ["zeta", "alpha"] {
            fs::create_dir(root.path().join(group)).unwrap();
        }
        touch(&root.path().join("zeta/b.frag.hlsl"));
        touch(&root.path().join("zeta/a.vert.hlsl"));

        let groups = discover(root.path()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "alpha");
        assert_eq!(groups[1].name, "zeta");
        let names: Vec<_> = groups[1].sources.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, ["a.vert.hlsl", "b.frag.hlsl"]);
    }

    #[test]
    fn test_discover_skips_shared_dir_and_loose_files() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("shared")).unwrap();
        touch(&root.path().join("shared/common.hlsl"));
        touch(&root.path().join("g_prebuiltShaders.h"));
        fs::create_dir(root.path().join("basic")).unwrap();

        let groups = discover(root.path()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "basic");
        assert!(groups[0].sources.is_empty());
    }

    #[test]
    fn test_discover_rejects_unknown_stage() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("basic")).unwrap();
        touch(&root.path().join("basic/helpers.hlsl"));

        let err = discover(root.path()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::UnsupportedShaderStage { ref group, ref file }
                if group == "basic" && file == "helpers.hlsl"
        ));
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");
        assert!(matches!(
            discover(&missing).unwrap_err(),
            PipelineError::Io { .. }
        ));
    }

    #[test]
    fn test_clean_deletes_only_artifacts() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("basic");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("basic.vert.hlsl"));
        touch(&dir.join("basic.vert.hlsl.spv"));
        touch(&dir.join("notes.txt"));

        let groups = discover(root.path()).unwrap();
        clean_stale_artifacts(&groups[0]).unwrap();

        assert!(dir.join("basic.vert.hlsl").exists());
        assert!(dir.join("notes.txt").exists());
        assert!(!dir.join("basic.vert.hlsl.spv").exists());

        // Safe to run again on a clean group.
        clean_stale_artifacts(&groups[0]).unwrap();
    }
}
