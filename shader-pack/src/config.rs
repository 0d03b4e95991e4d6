//! Pipeline configuration.
//!
//! Every path the pipeline touches comes from this struct; no component
//! reads the process working directory or the executable's own location.

use std::ffi::OsString;
use std::path::PathBuf;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory containing one subdirectory per shader group.
    pub shaders_root: PathBuf,
    /// Destination of the generated header.
    pub output_path: PathBuf,
    /// PATH-like value scanned for the Vulkan SDK marker.
    pub search_path: OsString,
    /// Explicit dxc executable, skipping search-path resolution.
    pub dxc: Option<PathBuf>,
    /// Explicit glslc executable, skipping lookup.
    pub glslc: Option<PathBuf>,
}

impl PipelineConfig {
    /// Header emitted at the shaders root unless overridden.
    pub const DEFAULT_HEADER_NAME: &'static str = "g_prebuiltShaders.h";

    /// Build a config with the default output path under `shaders_root`.
    pub fn new(shaders_root: PathBuf, search_path: OsString) -> Self {
        let output_path = shaders_root.join(Self::DEFAULT_HEADER_NAME);
        Self {
            shaders_root,
            output_path,
            search_path,
            dxc: None,
            glslc: None,
        }
    }

    /// Directory of shared HLSL includes, sibling of the group directories.
    pub fn shared_include_dir(&self) -> PathBuf {
        self.shaders_root.join(crate::discover::SHARED_INCLUDE_DIR)
    }
}
