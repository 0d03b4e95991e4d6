//! Locating the external shader compilers.
//!
//! dxc ships with the Vulkan SDK and is found by scanning a PATH-like value
//! for an entry naming the SDK install; glslc is resolved like any other
//! executable. Resolution happens before the stale-artifact sweep, and only
//! for the dialects the discovered sources actually use.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::classify::Dialect;
use crate::config::PipelineConfig;
use crate::discover::ShaderGroup;
use crate::error::PipelineError;

/// Search-path entry substring identifying an installed Vulkan SDK.
pub const SDK_MARKER: &str = "VulkanSDK";

#[cfg(windows)]
const DXC_EXE: &str = "dxc.exe";
#[cfg(not(windows))]
const DXC_EXE: &str = "dxc";

/// Resolved compiler locations for one run.
///
/// A field is `None` when no discovered source needs that dialect.
#[derive(Debug, Default, Clone)]
pub struct Toolchain {
    pub dxc: Option<PathBuf>,
    pub glslc: Option<PathBuf>,
}

/// Locate dxc from a PATH-like value by finding the SDK entry.
pub fn select_dxc(search_path: &OsStr) -> Result<PathBuf, PipelineError> {
    env::split_paths(search_path)
        .find(|entry| entry.to_string_lossy().contains(SDK_MARKER))
        .map(|entry| entry.join(DXC_EXE))
        .ok_or(PipelineError::ToolchainNotFound { marker: SDK_MARKER })
}

/// Locate glslc on the regular executable search path.
pub fn find_glslc() -> Result<PathBuf, PipelineError> {
    which::which("glslc").map_err(|e| PipelineError::CompilerNotFound {
        tool: "glslc",
        reason: e.to_string(),
    })
}

impl Toolchain {
    /// Resolve the compilers required by `groups`.
    ///
    /// Explicit paths in the config win over lookup. Called before any
    /// destructive step so a run that cannot succeed deletes nothing.
    pub fn resolve(groups: &[ShaderGroup], config: &PipelineConfig) -> Result<Self, PipelineError> {
        let needs = |dialect: Dialect| {
            groups
                .iter()
                .flat_map(|g| &g.sources)
                .any(|s| s.dialect == dialect)
        };

        let dxc = if needs(Dialect::Hlsl) {
            Some(match &config.dxc {
                Some(path) => path.clone(),
                None => select_dxc(&config.search_path)?,
            })
        } else {
            None
        };

        let glslc = if needs(Dialect::Glsl) {
            Some(match &config.glslc {
                Some(path) => path.clone(),
                None => find_glslc()?,
            })
        } else {
            None
        };

        Ok(Self { dxc, glslc })
    }

    /// Compiler executable for a dialect.
    pub fn compiler_for(&self, dialect: Dialect) -> Result<&Path, PipelineError> {
        let (slot, tool) = match dialect {
            Dialect::Hlsl => (&self.dxc, "dxc"),
            Dialect::Glsl => (&self.glslc, "glslc"),
        };
        slot.as_deref().ok_or_else(|| PipelineError::CompilerNotFound {
            tool,
            reason: "not resolved for this run".to_string(),
        })
    }
}
