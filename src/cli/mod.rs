//! Command handlers.
//!
//! Each subcommand gets a `run_*` function returning an exit code;
//! `main.rs` only parses arguments and dispatches.

mod browse;
mod export;
mod fetch;

pub use browse::run_browse;
pub use export::run_export;
pub use fetch::run_fetch;

/// Process exit codes.
pub mod exit_codes {
    /// Completed normally
    pub const SUCCESS: i32 = 0;
    /// The requested view matched no devices
    pub const NO_RESULTS: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
