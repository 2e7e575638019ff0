pub mod error;
pub mod sample;
pub mod sample_config;
pub mod status;

pub use error::AppError;
pub use sample::Sample;
pub use sample_config::{SampleConfig, load_config};
pub use status::Status;
