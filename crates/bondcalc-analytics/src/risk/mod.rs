//! Duration and convexity.

mod convexity;
mod duration;

pub use convexity::convexity;
pub use duration::{macaulay_duration, modified_duration};
