//! Build-time shader pipeline for the Vanta renderer.
//!
//! Compiles the engine's built-in HLSL/GLSL shaders to SPIR-V and embeds the
//! bytecode as `constexpr` byte arrays in a single generated C++ header, so
//! the renderer can create its default pipelines without touching the
//! filesystem at runtime.
//!
//! The pipeline is strictly staged:
//!
//! 1. [`discover`](discover::discover) - enumerate shader groups and classify
//!    every source filename once.
//! 2. [`Toolchain::resolve`](toolchain::Toolchain::resolve) - locate the
//!    external compilers the discovered sources actually need.
//! 3. [`clean_stale_artifacts`](discover::clean_stale_artifacts) - delete
//!    leftover `.spv` files from the previous run.
//! 4. [`compile`](compile) - invoke dxc/glslc per source file.
//! 5. [`encode`](encode) - render each artifact as an array literal.
//! 6. [`emit`](emit) - rewrite the generated header in one shot.
//!
//! [`pipeline::run`] wires the stages together. A failure at any stage leaves
//! a previously generated header byte-identical on disk.
//!
//! The unrelated [`staging`] module mirrors engine interface headers into a
//! target tree; it shares the error type and nothing else.

pub mod classify;
pub mod compile;
pub mod config;
pub mod discover;
pub mod emit;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod staging;
pub mod toolchain;

pub use classify::{Classification, Dialect, Stage};
pub use config::PipelineConfig;
pub use discover::{ShaderGroup, ShaderSource};
pub use error::{CompileError, PipelineError};
pub use pipeline::{run, PipelineReport};
pub use toolchain::Toolchain;
