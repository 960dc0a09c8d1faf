//! "To Draw a Square": a spinning, textured, hue-cycling quad.

mod app;
pub mod config;
pub mod frame;

pub use app::SquareApp;
pub use config::{Animation, ResourcePaths, SquareConfig};
pub use frame::FrameState;
