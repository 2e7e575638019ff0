//! sample: a small value type exercising branching, loops, string handling,
//! and a single-method capability trait.

pub mod domain;
pub mod ports;

pub use domain::{AppError, Sample, SampleConfig, Status, load_config};
pub use ports::Processable;

/// Maximum number of retry attempts.
pub const MAX_RETRIES: u32 = 3;
