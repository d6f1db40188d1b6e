pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::clockify::ClockifyApi;
pub use config::{CliConfig, Settings};
pub use core::engine::TrackerEngine;
pub use utils::error::{Result, TrackerError};
