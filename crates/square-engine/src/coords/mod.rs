//! Framebuffer-space geometry.
//!
//! Physical pixels, origin top-left. The quad itself lives in its own model
//! space and reaches clip space through the MVP matrix, not through these types.

mod viewport;

pub use viewport::Viewport;
