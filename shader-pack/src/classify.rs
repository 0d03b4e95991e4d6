//! Filename classification for shader sources.
//!
//! Dialect and stage are embedded in filenames by convention: HLSL sources
//! carry an `hlsl` marker with lower-case stage tokens (`vert`/`frag`), while
//! GLSL sources carry a `glsl` marker with capitalized stage tokens
//! (`Vert`/`Frag`). The casing asymmetry is an authored convention of the
//! shader tree. It is applied in exactly this one place so a mismatched name
//! cannot be accepted by one code path and dropped by another.
//!
//! Policy for odd names:
//! - a name containing the artifact marker `.spv` is never a source
//!   (leftover build output);
//! - no dialect marker at all means the file is not a shader source and is
//!   skipped silently (READMEs, include files, etc.);
//! - a dialect marker without a recognizable stage token is fatal, because a
//!   typo would otherwise silently drop a builtin shader from the engine.

/// Substring identifying compiled bytecode artifacts.
pub const ARTIFACT_MARKER: &str = ".spv";

/// Shader authoring language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Hlsl,
    Glsl,
}

/// Graphics pipeline stage a shader executes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// dxc target profile for this stage.
    pub fn dxc_profile(self) -> &'static str {
        match self {
            Stage::Vertex => "vs_6_1",
            Stage::Fragment => "ps_6_1",
        }
    }

    /// Value for glslc's `-fshader-stage=` flag.
    pub fn glslc_stage(self) -> &'static str {
        match self {
            Stage::Vertex => "vert",
            Stage::Fragment => "frag",
        }
    }
}

/// Outcome of classifying one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A compilable shader source.
    Source { dialect: Dialect, stage: Stage },
    /// Not a shader source; skipped without error.
    NotAShader,
    /// Carries a dialect marker but no recognizable stage token; fatal.
    UnknownStage,
}

/// Classify a filename into dialect and stage.
pub fn classify(file_name: &str) -> Classification {
    if file_name.contains(ARTIFACT_MARKER) {
        return Classification::NotAShader;
    }

    if file_name.contains("hlsl") {
        // HLSL convention: lower-case stage tokens.
        if file_name.contains("vert") {
            Classification::Source {
                dialect: Dialect::Hlsl,
                stage: Stage::Vertex,
            }
        } else if file_name.contains("frag") {
            Classification::Source {
                dialect: Dialect::Hlsl,
                stage: Stage::Fragment,
            }
        } else {
            Classification::UnknownStage
        }
    } else if file_name.contains("glsl") {
        // GLSL convention: capitalized stage tokens.
        if file_name.contains("Vert") {
            Classification::Source {
                dialect: Dialect::Glsl,
                stage: Stage::Vertex,
            }
        } else if file_name.contains("Frag") {
            Classification::Source {
                dialect: Dialect::Glsl,
                stage: Stage::Fragment,
            }
        } else {
            Classification::UnknownStage
        }
    } else {
        Classification::NotAShader
    }
}
