//! Turning raw sensor readings into station positions.

pub mod aggregate;
pub mod channel;
pub mod decode;
pub mod latest;

pub use aggregate::aggregate;
pub use decode::{decode_angle, Axis};
pub use latest::select_latest;
