//! Configuration layering for the `void` binary.
//!
//! Values are resolved in increasing priority: built-in defaults, the TOML config file,
//! command-line flags and finally `-S key=value` overrides.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{build_dock_config, build_sample_config};
pub use models::{DockAppConfig, SampleAppConfig};
