//! Configuration loading and shared configuration types for the fleet feed
//! reconciler.
//!
//! Configuration is assembled from a `configuration/` directory holding a
//! `base` file plus an environment-specific overlay, with final overrides
//! taken from `APP_`-prefixed environment variables.

mod environment;
mod load;

pub mod shared;

pub use environment::Environment;
pub use load::{Config, LoadConfigError, load_config};
