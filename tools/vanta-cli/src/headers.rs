//! Headers command - stage engine interface headers for SDK consumers.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vanta_shader_pack::staging;

/// Arguments for the headers command
#[derive(Args)]
pub struct HeadersArgs {
    /// Engine source tree to gather headers from
    #[arg(short, long)]
    pub source: PathBuf,

    /// Target root; headers land under <target>/headers/
    #[arg(short, long)]
    pub target: PathBuf,
}

/// Execute the headers command
pub fn execute(args: HeadersArgs) -> Result<()> {
    let copied = staging::stage(&args.source, &args.target)?;

    println!("Staged {} headers", copied);
    println!(
        "  Output: {}",
        args.target.join(staging::STAGING_DIR).display()
    );

    Ok(())
}
