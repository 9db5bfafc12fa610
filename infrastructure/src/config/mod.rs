//! Configuration file loading for outreach-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OUTREACH_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./outreach.toml` or `./.outreach.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/outreach-scout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FilePipelineConfig,
    FileTransportConfig,
};
pub use loader::ConfigLoader;
