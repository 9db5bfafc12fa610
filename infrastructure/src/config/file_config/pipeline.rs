//! Pipeline configuration from TOML (`[pipeline]` section)

use outreach_application::PipelineConfig;
use serde::{Deserialize, Serialize};

/// Batch fan-out and page fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Domains processed at the same time.
    pub concurrency: usize,
    /// Per-request timeout for page fetches, in seconds.
    pub fetch_timeout_seconds: u64,
    /// Contact pages followed per domain.
    pub max_contact_pages: usize,
    /// Paragraph characters passed to the outreach prompt.
    pub excerpt_chars: usize,
    /// `User-Agent` header sent with page fetches.
    pub user_agent: String,
    /// Largest response body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        let defaults = PipelineConfig::default();
        Self {
            concurrency: defaults.concurrency,
            fetch_timeout_seconds: 10,
            max_contact_pages: defaults.max_contact_pages,
            excerpt_chars: defaults.excerpt_chars,
            user_agent: format!("outreach-scout/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FilePipelineConfig {
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_concurrency(self.concurrency)
            .with_max_contact_pages(self.max_contact_pages)
            .with_excerpt_chars(self.excerpt_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_pipeline_deserialize() {
        let toml_str = r#"
[pipeline]
concurrency = 8
max_contact_pages = 1
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pipeline.concurrency, 8);
        assert_eq!(config.pipeline.fetch_timeout_seconds, 10);

        let pipeline = config.pipeline.to_pipeline_config();
        assert_eq!(pipeline.concurrency, 8);
        assert_eq!(pipeline.max_contact_pages, 1);
        assert_eq!(pipeline.excerpt_chars, 500);
    }

    #[test]
    fn test_pipeline_defaults() {
        let config = FilePipelineConfig::default();
        assert_eq!(config.max_body_bytes, 5 * 1024 * 1024);
        assert!(config.user_agent.starts_with("outreach-scout/"));
    }
}
