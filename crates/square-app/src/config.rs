use std::path::{Path, PathBuf};

use winit::dpi::LogicalSize;

use square_engine::device::GpuInit;
use square_engine::shader::ShaderFailurePolicy;
use square_engine::window::RuntimeConfig;

/// Name of the MVP matrix uniform the shader must declare.
pub const MVP_UNIFORM: &str = "u_mvp";

/// Resource files, relative to the working directory.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    pub shader: PathBuf,
    pub image: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            shader: PathBuf::from("Resources/BasicShader.glsl"),
            image: PathBuf::from("Resources/MyImage.png"),
        }
    }
}

impl ResourcePaths {
    /// Resolves `path` against the working directory, falling back to the
    /// workspace root so `cargo run` works from any directory.
    pub fn resolve(path: &Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            return path.to_path_buf();
        }

        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(path);
        if workspace.exists() {
            workspace
        } else {
            path.to_path_buf()
        }
    }

    pub fn shader_path(&self) -> PathBuf {
        Self::resolve(&self.shader)
    }

    pub fn image_path(&self) -> PathBuf {
        Self::resolve(&self.image)
    }
}

/// Time-driven animation constants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Animation {
    /// Full hue turns per second of the clear color.
    pub hue_speed: f32,
    /// Quad rotation rate about +Z.
    pub degrees_per_second: f32,
    /// Height of the orthographic view volume in model units.
    pub view_scale: f32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            hue_speed: 0.1,
            degrees_per_second: 360.0,
            view_scale: 3.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct SquareConfig {
    pub title: String,
    pub window_size: LogicalSize<f64>,
    pub msaa_samples: u32,
    pub resources: ResourcePaths,
    pub animation: Animation,
    pub shader_failure_policy: ShaderFailurePolicy,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            title: "To Draw a Square".to_string(),
            window_size: LogicalSize::new(1200.0, 800.0),
            msaa_samples: 4,
            resources: ResourcePaths::default(),
            animation: Animation::default(),
            shader_failure_policy: ShaderFailurePolicy::Continue,
        }
    }
}

impl SquareConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.window_size,
            resizable: true,
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            sample_count: self.msaa_samples,
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults() {
        let cfg = SquareConfig::default();
        let rt = cfg.runtime();
        assert_eq!(rt.title, "To Draw a Square");
        assert_eq!(rt.initial_size, LogicalSize::new(1200.0, 800.0));
        assert!(rt.resizable);
        assert_eq!(cfg.gpu_init().sample_count, 4);
    }

    #[test]
    fn resolve_keeps_unknown_paths() {
        let p = Path::new("not/a/real/file.glsl");
        assert_eq!(ResourcePaths::resolve(p), p.to_path_buf());
    }

    #[test]
    fn resolve_finds_workspace_resources() {
        let paths = ResourcePaths::default();
        assert!(paths.shader_path().exists(), "{}", paths.shader_path().display());
        assert!(paths.image_path().exists(), "{}", paths.image_path().display());
    }
}
