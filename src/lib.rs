pub mod errors;
pub mod interpolate;
pub mod radix;
pub mod rational;
pub mod ss;
pub mod task;
pub mod utils;

pub use crate::errors::{ReconError, Result};
pub use crate::rational::Rational;
pub use crate::task::{get_task, Point, Task};
