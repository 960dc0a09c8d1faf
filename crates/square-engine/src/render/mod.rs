//! GPU rendering subsystem.
//!
//! Convention:
//! - quad geometry is in model space, centered on the origin
//! - the vertex shader applies a single `u_mvp` matrix
//! - projection is orthographic, sized by the window aspect ratio

mod ctx;
pub mod quad;
pub mod transform;
pub mod vertex;

pub use ctx::RenderCtx;
pub use quad::{QuadGeometry, QuadRenderer};
pub use vertex::{Vertex, QUAD_INDICES, QUAD_VERTICES};
