//! Color model shared by the frame loop and the GPU layer.

pub mod color;

pub use color::Color;
