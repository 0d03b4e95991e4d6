//! End-to-end pipeline orchestration.
//!
//! Stage order is deliberate: discovery and classification first, then
//! toolchain resolution, and only then the destructive stale-artifact sweep.
//! A run that cannot possibly succeed never deletes anything, and the
//! generated header is only replaced after every compile job has succeeded.
//!
//! Compile jobs are independent and dominated by external-process wall
//! time, so they fan out over a rayon pool. Results are collected in input
//! order (groups sorted by name, files by name), keeping the emitted header
//! deterministic regardless of completion order.

use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::compile;
use crate::config::PipelineConfig;
use crate::discover::{self, ShaderSource};
use crate::emit::{self, EncodedShader};
use crate::encode;
use crate::error::PipelineError;
use crate::toolchain::Toolchain;

/// Summary of a successful run.
#[derive(Debug)]
pub struct PipelineReport {
    pub groups: usize,
    pub shaders: usize,
    pub output_path: PathBuf,
}

struct CompileJob<'a> {
    group: &'a str,
    source: &'a ShaderSource,
    compiler: &'a std::path::Path,
}

/// Run the full pipeline: discover, resolve, clean, compile, encode, emit.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    let groups = discover::discover(&config.shaders_root)?;
    info!(
        "discovered {} shader groups under {}",
        groups.len(),
        config.shaders_root.display()
    );

    let toolchain = Toolchain::resolve(&groups, config)?;
    if let Some(dxc) = &toolchain.dxc {
        debug!("using dxc at {}", dxc.display());
    }
    if let Some(glslc) = &toolchain.glslc {
        debug!("using glslc at {}", glslc.display());
    }

    for group in &groups {
        discover::clean_stale_artifacts(group)?;
    }

    let mut jobs = Vec::new();
    for group in &groups {
        for source in &group.sources {
            jobs.push(CompileJob {
                group: &group.name,
                source,
                compiler: toolchain.compiler_for(source.dialect)?,
            });
        }
    }

    let include_dir = config.shared_include_dir();
    let encoded: Vec<EncodedShader> = jobs
        .par_iter()
        .map(|job| {
            debug!("compiling {}/{}", job.group, job.source.file_name);
            let artifact =
                compile::compile(job.source, job.compiler, &include_dir).map_err(|e| {
                    PipelineError::CompilationFailed {
                        group: job.group.to_string(),
                        file: job.source.file_name.clone(),
                        source: e,
                    }
                })?;
            let bytes = fs::read(&artifact).map_err(|e| {
                PipelineError::io(
                    format!("failed to read bytecode artifact `{}`", artifact.display()),
                    e,
                )
            })?;
            let symbol = encode::symbol_name(&job.source.file_name);
            let block = encode::encode(&bytes, &symbol);
            Ok(EncodedShader {
                origin: format!("{}/{}", job.group, job.source.file_name),
                symbol,
                block,
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    let header = emit::render_header(&encoded)?;
    emit::write_header(&config.output_path, &header)?;

    info!(
        "embedded {} shaders into {}",
        encoded.len(),
        config.output_path.display()
    );

    Ok(PipelineReport {
        groups: groups.len(),
        shaders: encoded.len(),
        output_path: config.output_path.clone(),
    })
}
