//! Per-dialect compiler invocation.
//!
//! Each dialect gets a small command builder so the exact flag battery lives
//! in one place. Invocations block until the child exits and capture its
//! output, so a failed compile carries the compiler's own diagnostics
//! instead of a bare exit status. No timeout: a hung compiler blocks the
//! run, which is acceptable for a local build tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::classify::{Dialect, ARTIFACT_MARKER};
use crate::discover::ShaderSource;
use crate::error::CompileError;

/// SPIR-V codegen battery passed to dxc for every HLSL shader. The emitted
/// bytecode must carry the capabilities the renderer's pipelines rely on.
const DXC_SPIRV_FLAGS: &[&str] = &[
    "-spirv",
    "-fspv-target-env=vulkan1.2",
    "-fspv-extension=SPV_KHR_ray_query",
    "-fspv-extension=SPV_KHR_ray_tracing",
    "-fspv-extension=SPV_KHR_multiview",
    "-fspv-extension=SPV_KHR_shader_draw_parameters",
    "-fspv-extension=SPV_EXT_descriptor_indexing",
];

/// Entry point expected in every builtin shader.
const ENTRY_POINT: &str = "main";

/// Bytecode path for a source: the source path plus the artifact extension.
pub fn artifact_path(source: &Path) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(ARTIFACT_MARKER);
    PathBuf::from(path)
}

fn hlsl_command(dxc: &Path, source: &ShaderSource, include_dir: &Path, artifact: &Path) -> Command {
    let mut cmd = Command::new(dxc);
    cmd.args(DXC_SPIRV_FLAGS)
        .arg("-T")
        .arg(source.stage.dxc_profile())
        .arg("-E")
        .arg(ENTRY_POINT)
        .arg("-I")
        .arg(include_dir)
        .arg(&source.path)
        .arg("-Fo")
        .arg(artifact);
    cmd
}

fn glsl_command(glslc: &Path, source: &ShaderSource, artifact: &Path) -> Command {
    let mut cmd = Command::new(glslc);
    cmd.arg(format!("-fshader-stage={}", source.stage.glslc_stage()))
        .arg(&source.path)
        .arg("-o")
        .arg(artifact);
    cmd
}

/// Compile one source file, blocking until the external compiler exits.
///
/// Returns the bytecode artifact path on success. `include_dir` is only used
/// for HLSL (`-I`); glslc resolves includes relative to the source.
pub fn compile(
    source: &ShaderSource,
    compiler: &Path,
    include_dir: &Path,
) -> Result<PathBuf, CompileError> {
    let artifact = artifact_path(&source.path);
    let mut cmd = match source.dialect {
        Dialect::Hlsl => hlsl_command(compiler, source, include_dir, &artifact),
        Dialect::Glsl => glsl_command(compiler, source, &artifact),
    };

    let output = cmd.output().map_err(|e| CompileError::Launch {
        tool: compiler.display().to_string(),
        source: e,
    })?;

    if !output.status.success() {
        let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
        if diagnostics.trim().is_empty() {
            diagnostics = String::from_utf8_lossy(&output.stdout).into_owned();
        }
        return Err(CompileError::NonZeroExit {
            code: output.status.code(),
            output: diagnostics,
        });
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Stage;

    fn source(file_name: &str, dialect: Dialect, stage: Stage) -> ShaderSource {
        ShaderSource {
            path: PathBuf::from("/shaders/basic").join(file_name),
            file_name: file_name.to_string(),
            dialect,
            stage,
        }
    }

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_artifact_path_appends_marker() {
        assert_eq!(
            artifact_path(Path::new("/shaders/basic/basic.vert.hlsl")),
            PathBuf::from("/shaders/basic/basic.vert.hlsl.spv")
        );
    }

    #[test]
    fn test_hlsl_command_flags() {
        let src = source("basic.frag.hlsl", Dialect::Hlsl, Stage::Fragment);
        let cmd = hlsl_command(
            Path::new("/sdk/bin/dxc"),
            &src,
            Path::new("/shaders/shared"),
            Path::new("/shaders/basic/basic.frag.hlsl.spv"),
        );
        let args = args_of(&cmd);
        assert!(args.contains(&"-spirv".to_string()));
        assert!(args.contains(&"-fspv-extension=SPV_KHR_ray_query".to_string()));
        assert!(args.contains(&"-fspv-extension=SPV_EXT_descriptor_indexing".to_string()));

        // Stage selects the target profile.
        let t = args.iter().position(|a| a == "-T").unwrap();
        assert_eq!(args[t + 1], "ps_6_1");
        let e = args.iter().position(|a| a == "-E").unwrap();
        assert_eq!(args[e + 1], "main");
        let i = args.iter().position(|a| a == "-I").unwrap();
        assert_eq!(args[i + 1], "/shaders/shared");
    }

    #[test]
    fn test_hlsl_vertex_profile() {
        let src = source("basic.vert.hlsl", Dialect::Hlsl, Stage::Vertex);
        let cmd = hlsl_command(
            Path::new("dxc"),
            &src,
            Path::new("/shaders/shared"),
            Path::new("/shaders/basic/basic.vert.hlsl.spv"),
        );
        let args = args_of(&cmd);
        let t = args.iter().position(|a| a == "-T").unwrap();
        assert_eq!(args[t + 1], "vs_6_1");
    }

    #[test]
    fn test_glsl_command_stage_flag() {
        let src = source("skyVert.glsl", Dialect::Glsl, Stage::Vertex);
        let cmd = glsl_command(
            Path::new("glslc"),
            &src,
            Path::new("/shaders/basic/skyVert.glsl.spv"),
        );
        let args = args_of(&cmd);
        assert_eq!(args[0], "-fshader-stage=vert");
        let o = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[o + 1], "/shaders/basic/skyVert.glsl.spv");
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_failure_is_structured() {
        let src = source("basic.vert.hlsl", Dialect::Hlsl, Stage::Vertex);
        let err = compile(
            &src,
            Path::new("/nonexistent/dxc"),
            Path::new("/shaders/shared"),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::Launch { .. }));
    }
}
