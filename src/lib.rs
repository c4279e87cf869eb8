pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod schedule;
pub mod snapshot;
pub mod utils;

pub use config::ProcessorConfig;
pub use error::{ProcessorError, Result};
