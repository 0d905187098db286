//! Configuration module for fixgrade.
//!
//! Provides typed configuration with defaults, YAML config file discovery,
//! and CLI argument merging. Place a `.fixgrade.yaml` in the working
//! directory or under `~/.config/fixgrade/`:
//!
//! ```yaml
//! data:
//!   base_url: https://data.fixgrade.dev
//!   timeout_secs: 15
//! tui:
//!   theme: light
//!   reduced_motion: true
//! ```

mod defaults;
pub mod file;
mod types;

pub use defaults::{DEFAULT_BASE_URL, DEFAULT_STRUCTURED_LIMIT, DEFAULT_TIMEOUT_SECS};
pub use types::{AppConfig, DataConfig, OutputConfig, TuiConfig, TuiPreferences};
