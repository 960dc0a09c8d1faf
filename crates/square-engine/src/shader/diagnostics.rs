use std::collections::BTreeSet;
use std::fmt;

use wgpu::naga::front::glsl;
use wgpu::naga::valid::{Capabilities, ValidationFlags, Validator};
use wgpu::naga::{AddressSpace, Binding, Module, Handle, Type, TypeInner, VectorSize};

use super::{ShaderSources, Stage};

/// One compile or link message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// `None` for program-level (link) messages.
    pub stage: Option<Stage>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Some(stage) => write!(f, "{stage} shader: {}", self.message),
            None => write!(f, "program: {}", self.message),
        }
    }
}

/// Where a named matrix uniform lives.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformInfo {
    pub group: u32,
    pub binding: u32,
}

/// Outcome of compiling both stages and checking that they fit together.
#[derive(Debug, Clone, Default)]
pub struct ShaderReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Location of the MVP uniform, if the vertex stage declares it as a `mat4`.
    pub mvp: Option<UniformInfo>,
}

impl ShaderReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn stage_diagnostics(&self, stage: Stage) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.stage == Some(stage))
    }

    pub fn program_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.stage.is_none())
    }

    /// Writes the report to the log: one line per stage when clean, one
    /// `error!` per diagnostic otherwise.
    pub fn log(&self) {
        for stage in [Stage::Vertex, Stage::Fragment] {
            let mut clean = true;
            for d in self.stage_diagnostics(stage) {
                clean = false;
                log::error!("{d}");
            }
            if clean {
                log::info!("{stage} shader compiled");
            }
        }

        let mut linked = true;
        for d in self.program_diagnostics() {
            linked = false;
            log::error!("{d}");
        }
        if linked {
            log::info!("shader program linked");
        }
    }

    fn push(&mut self, stage: Option<Stage>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            stage,
            message: message.into(),
        });
    }
}

/// Compiles both stages and checks the program interface.
///
/// `vertex_locations` are the shader locations fed by the vertex buffer
/// layout; `mvp_uniform` is the name of the required `mat4` uniform.
pub fn check_program(
    sources: &ShaderSources,
    vertex_locations: &[u32],
    mvp_uniform: &str,
) -> ShaderReport {
    let mut report = ShaderReport::default();

    let vertex = compile_stage(&mut report, Stage::Vertex, &sources.vertex);
    let fragment = compile_stage(&mut report, Stage::Fragment, &sources.fragment);

    // Linking needs both halves.
    let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
        report.push(None, "not linked: a stage failed to compile");
        return report;
    };

    report.mvp = find_mat4_uniform(&vertex, mvp_uniform);
    if report.mvp.is_none() {
        report.push(None, format!("vertex stage has no `mat4 {mvp_uniform}` uniform"));
    }

    let provided: BTreeSet<u32> = vertex_locations.iter().copied().collect();
    for location in stage_locations(&vertex, Stage::Vertex, Io::Input) {
        if !provided.contains(&location) {
            report.push(
                None,
                format!("vertex input location {location} has no matching vertex attribute"),
            );
        }
    }

    let written = stage_locations(&vertex, Stage::Vertex, Io::Output);
    for location in stage_locations(&fragment, Stage::Fragment, Io::Input) {
        if !written.contains(&location) {
            report.push(
                None,
                format!("fragment input location {location} is not written by the vertex stage"),
            );
        }
    }

    report
}

fn compile_stage(report: &mut ShaderReport, stage: Stage, source: &str) -> Option<Module> {
    let mut frontend = glsl::Frontend::default();
    let options = glsl::Options::from(stage.naga());

    let module = match frontend.parse(&options, source) {
        Ok(module) => module,
        Err(errors) => {
            for err in &errors.errors {
                report.push(Some(stage), err.to_string());
            }
            return None;
        }
    };

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    if let Err(err) = validator.validate(&module) {
        report.push(Some(stage), err.as_inner().to_string());
        return None;
    }

    Some(module)
}

fn is_mat4(module: &Module, ty: Handle<Type>) -> bool {
    matches!(
        module.types[ty].inner,
        TypeInner::Matrix {
            columns: VectorSize::Quad,
            rows: VectorSize::Quad,
            ..
        }
    )
}

/// Finds `name` either as a bare uniform or as a member of a uniform block.
fn find_mat4_uniform(module: &Module, name: &str) -> Option<UniformInfo> {
    module
        .global_variables
        .iter()
        .filter(|(_, var)| var.space == AddressSpace::Uniform)
        .find_map(|(_, var)| {
            let matches = match &module.types[var.ty].inner {
                TypeInner::Struct { members, .. } => members
                    .iter()
                    .any(|m| m.name.as_deref() == Some(name) && is_mat4(module, m.ty)),
                _ => var.name.as_deref() == Some(name) && is_mat4(module, var.ty),
            };

            let binding = var.binding.as_ref()?;
            matches.then_some(UniformInfo {
                group: binding.group,
                binding: binding.binding,
            })
        })
}

#[derive(Copy, Clone)]
enum Io {
    Input,
    Output,
}

/// User-defined `location`s consumed (`Input`) or produced (`Output`) by the
/// stage's entry point. Built-ins such as `gl_Position` are skipped.
fn stage_locations(module: &Module, stage: Stage, io: Io) -> BTreeSet<u32> {
    let mut out = BTreeSet::new();

    let Some(ep) = module.entry_points.iter().find(|ep| ep.stage == stage.naga()) else {
        return out;
    };

    match io {
        Io::Input => {
            for arg in &ep.function.arguments {
                collect_locations(module, arg.ty, arg.binding.as_ref(), &mut out);
            }
        }
        Io::Output => {
            if let Some(result) = &ep.function.result {
                collect_locations(module, result.ty, result.binding.as_ref(), &mut out);
            }
        }
    }

    out
}

fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut BTreeSet<u32>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location);
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}
