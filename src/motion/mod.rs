pub mod easing;
pub mod frame_loop;
pub mod tween;

pub use easing::CubicBezier;
pub use frame_loop::{start_frame_loop, FrameLoopHandle};
pub use tween::Tween;
