use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Line separating the vertex stage from the fragment stage.
pub const FRAGMENT_MARKER: &str = "// Fragment Shader";

/// Pipeline stage of a shader body.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn naga(self) -> wgpu::naga::ShaderStage {
        match self {
            Stage::Vertex => wgpu::naga::ShaderStage::Vertex,
            Stage::Fragment => wgpu::naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("shader source has no `// Fragment Shader` line separating the stages")]
    MissingMarker,

    #[error("{0} stage is empty")]
    EmptyStage(Stage),
}

/// Vertex and fragment GLSL split out of a combined source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Splits combined source text on the first [`FRAGMENT_MARKER`].
    ///
    /// The marker itself belongs to neither stage. Anything after a second
    /// marker stays part of the fragment body.
    pub fn split(text: &str) -> std::result::Result<Self, ShaderError> {
        let (vertex, fragment) = text
            .split_once(FRAGMENT_MARKER)
            .ok_or(ShaderError::MissingMarker)?;

        // `#version` has to lead each stage, so drop the remainder of the
        // marker line and any blank lines that follow it.
        let vertex = vertex.trim_start();
        let fragment = fragment.trim_start();

        if vertex.trim().is_empty() {
            return Err(ShaderError::EmptyStage(Stage::Vertex));
        }
        if fragment.trim().is_empty() {
            return Err(ShaderError::EmptyStage(Stage::Fragment));
        }

        Ok(Self {
            vertex: vertex.to_owned(),
            fragment: fragment.to_owned(),
        })
    }

    /// Reads and splits a combined shader file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader source {}", path.display()))?;

        let sources = Self::split(&text)
            .with_context(|| format!("malformed shader source {}", path.display()))?;

        log::info!(
            "loaded shader {} ({} vertex bytes, {} fragment bytes)",
            path.display(),
            sources.vertex.len(),
            sources.fragment.len()
        );

        Ok(sources)
    }

    pub fn stage(&self, stage: Stage) -> &str {
        match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
        }
    }
}
