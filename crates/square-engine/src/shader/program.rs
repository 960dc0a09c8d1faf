use std::borrow::Cow;

use anyhow::{bail, Result};

use super::{check_program, ShaderReport, ShaderSources, Stage};

/// What to do when a shader stage fails to compile or the program fails to link.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShaderFailurePolicy {
    /// Log the diagnostics and keep going. Rendering output is undefined.
    #[default]
    Continue,
    /// Log the diagnostics and fail startup.
    Abort,
}

/// Compiled vertex + fragment modules with their diagnostics.
pub struct ShaderProgram {
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
    report: ShaderReport,
}

impl ShaderProgram {
    /// GLSL entry point of both stages.
    pub const ENTRY_POINT: &'static str = "main";

    /// Checks `sources`, logs the report, and creates the GPU modules.
    pub fn build(
        device: &wgpu::Device,
        sources: &ShaderSources,
        vertex_locations: &[u32],
        mvp_uniform: &str,
        policy: ShaderFailurePolicy,
    ) -> Result<Self> {
        let report = check_program(sources, vertex_locations, mvp_uniform);
        report.log();

        if !report.is_ok() {
            match policy {
                ShaderFailurePolicy::Abort => bail!(
                    "shader program rejected with {} diagnostic(s)",
                    report.diagnostics.len()
                ),
                ShaderFailurePolicy::Continue => {
                    log::warn!("continuing with an invalid shader program")
                }
            }
        }

        Ok(Self {
            vertex: create_module(device, Stage::Vertex, &sources.vertex),
            fragment: create_module(device, Stage::Fragment, &sources.fragment),
            report,
        })
    }

    pub fn vertex(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    pub fn fragment(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }

    pub fn report(&self) -> &ShaderReport {
        &self.report
    }
}

fn create_module(device: &wgpu::Device, stage: Stage, source: &str) -> wgpu::ShaderModule {
    let label = format!("square {stage} shader");
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(source.to_owned()),
            stage: stage.naga(),
            defines: &[],
        },
    })
}
