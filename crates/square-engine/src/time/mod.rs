//! Time subsystem.
//!
//! One `FrameClock` per window; call `tick()` once per presented frame to
//! obtain a `FrameTime`. Elapsed time is measured from clock creation on the
//! monotonic clock, which is what the animations are driven by.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
