//! Shaders command - compile builtin shaders and regenerate the header.
//!
//! The executable search path is read once here and threaded through the
//! pipeline config; nothing downstream reads ambient process state.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vanta_shader_pack::{pipeline, PipelineConfig};

/// Arguments for the shaders command
#[derive(Args)]
pub struct ShadersArgs {
    /// Shaders root (one subdirectory per shader group)
    #[arg(short, long)]
    pub root: PathBuf,

    /// Generated header path (defaults to <root>/g_prebuiltShaders.h)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Explicit dxc executable (skips the Vulkan SDK search-path scan)
    #[arg(long)]
    pub dxc: Option<PathBuf>,

    /// Explicit glslc executable (skips the search-path lookup)
    #[arg(long)]
    pub glslc: Option<PathBuf>,
}

/// Execute the shaders command
pub fn execute(args: ShadersArgs) -> Result<()> {
    let search_path = std::env::var_os("PATH").unwrap_or_default();

    let mut config = PipelineConfig::new(args.root, search_path);
    if let Some(output) = args.output {
        config.output_path = output;
    }
    config.dxc = args.dxc;
    config.glslc = args.glslc;

    let report = pipeline::run(&config)?;

    println!(
        "Embedded {} shaders from {} groups",
        report.shaders, report.groups
    );
    println!("  Output: {}", report.output_path.display());

    Ok(())
}
