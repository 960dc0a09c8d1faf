//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod runtime;
mod state;

pub use runtime::{Runtime, RuntimeConfig};
pub use state::LoopState;
