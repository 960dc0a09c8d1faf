//! Shader loading and diagnostics.
//!
//! Shaders are GLSL stored as a single file: the vertex stage, a marker line,
//! then the fragment stage. Each stage is compiled through naga on the CPU
//! first so compile and link problems can be reported before wgpu sees them.

mod diagnostics;
mod program;
mod source;

pub use diagnostics::{check_program, Diagnostic, ShaderReport, UniformInfo};
pub use program::{ShaderFailurePolicy, ShaderProgram};
pub use source::{ShaderError, ShaderSources, Stage, FRAGMENT_MARKER};
