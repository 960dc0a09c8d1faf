//! Image decoding and 2D texture upload.

mod decode;
mod gpu;

pub use decode::{decode_rgba, load_rgba, RgbaImage};
pub use gpu::{SamplerSettings, Texture2d};
