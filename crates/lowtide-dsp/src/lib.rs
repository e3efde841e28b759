#![deny(unsafe_op_in_unsafe_fn)]

pub mod biquad;
pub mod gain;
pub mod ramp;
pub mod utils;

pub use biquad::Biquad;
pub use gain::{db_to_linear, linear_to_db};
pub use ramp::LinearRamp;
pub use utils::{hard_clip, sanitize, DenormalGuard};
