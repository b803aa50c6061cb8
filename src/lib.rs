// src/lib.rs - Library interface for the pattern pipeline

pub mod constants;
pub mod curves;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod logging;
pub mod orchestrator;
pub mod pattern_kind;
pub mod pattern_params;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

// Crate version; a VERGEN_GIT_SEMVER set at build time takes precedence.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
