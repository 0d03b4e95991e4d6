//! Vanta CLI - build tasks for the Vanta engine
//!
//! # Commands
//!
//! - `vanta shaders` - compile builtin shaders to SPIR-V and regenerate the
//!   embedded header
//! - `vanta headers` - stage engine interface headers into a target tree
//!
//! # Usage
//!
//! ```bash
//! # Rebuild the embedded shader header for the engine's shader tree
//! vanta shaders --root engine/shaders
//!
//! # Point at explicit compilers instead of the Vulkan SDK search-path scan
//! vanta shaders --root engine/shaders --dxc /opt/dxc/bin/dxc --glslc /usr/bin/glslc
//!
//! # Mirror the engine's public headers into an SDK staging tree
//! vanta headers --source engine --target dist/sdk
//! ```

mod headers;
mod shaders;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Vanta CLI - build tasks for the Vanta engine
#[derive(Parser)]
#[command(name = "vanta")]
#[command(about = "Build tasks for the Vanta engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile builtin shaders and regenerate the embedded header
    Shaders(shaders::ShadersArgs),

    /// Stage engine interface headers into a target tree
    Headers(headers::HeadersArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shaders(args) => shaders::execute(args),
        Commands::Headers(args) => headers::execute(args),
    }
}
