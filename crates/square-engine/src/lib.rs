//! Square engine crate.
//!
//! Platform + GPU runtime for a single window drawing one textured quad:
//! window and frame loop, wgpu device, shader and texture loading, and the
//! quad renderer itself.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;
pub mod texture;
pub mod time;
pub mod window;
