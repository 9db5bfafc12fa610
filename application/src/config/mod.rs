//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`PipelineConfig`]: batch fan-out and per-domain limits
//! - [`OutreachContext`]: sender identity and generation settings

pub mod outreach_context;
pub mod pipeline_config;

pub use outreach_context::OutreachContext;
pub use pipeline_config::PipelineConfig;
