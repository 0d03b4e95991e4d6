//! Error taxonomy for the shader pipeline.
//!
//! Every variant is fatal: the pipeline never retries and never produces a
//! partial header. Errors surface to the CLI as a non-zero exit with the
//! full chain printed.

use thiserror::Error;

/// Top-level pipeline failure.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No search-path entry carried the SDK marker, so dxc cannot be located.
    #[error(
        "no search-path entry contains `{marker}`; install the Vulkan SDK and add it to the search path"
    )]
    ToolchainNotFound { marker: &'static str },

    /// A required compiler executable could not be located.
    #[error("shader compiler `{tool}` could not be located: {reason}")]
    CompilerNotFound { tool: &'static str, reason: String },

    /// A filename carried a dialect marker but no recognizable stage token.
    #[error(
        "unsupported shader stage in `{file}` (group `{group}`): no vert/frag stage token in the filename"
    )]
    UnsupportedShaderStage { group: String, file: String },

    /// The external compiler failed for one source file.
    #[error("failed to compile `{file}` (group `{group}`)")]
    CompilationFailed {
        group: String,
        file: String,
        #[source]
        source: CompileError,
    },

    /// Two source files derive the same generated constant name.
    #[error("duplicate generated symbol `{symbol}`: produced by both `{first}` and `{second}`")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    /// Filesystem failure (missing shaders root, permission error, copy failure).
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Structured result of one external compiler invocation.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The compiler process could not be launched at all.
    #[error("failed to launch `{tool}`")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran but exited non-zero; `output` carries its diagnostics.
    #[error("compiler exited with code {code:?}:\n{output}")]
    NonZeroExit { code: Option<i32>, output: String },
}
