//! Run Outreach use case
//!
//! Processes a batch of domains end to end. Each domain runs in its own task:
//!
//! 1. **Fetch**: retrieve the domain's front page
//! 2. **Harvest**: collect candidate addresses, following contact links
//! 3. **Draft**: generate the outreach body
//! 4. **Select**: pick the recipient from the candidates
//!
//! A semaphore bounds how many domains are in flight. Results are collected
//! by a single join loop and returned in input order.

use crate::config::{OutreachContext, PipelineConfig};
use crate::ports::page_fetcher::{FetchError, PageFetcher};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use crate::use_cases::draft_outreach::DraftOutreachUseCase;
use crate::use_cases::harvest_contacts::HarvestContactsUseCase;
use outreach_domain::{DomainError, DomainTarget, OutreachResult, PageSnapshot};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Errors that abort processing of a single domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunOutreachError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Cancelled")]
    Cancelled,

    #[error("Processing panicked: {0}")]
    Panicked(String),
}

/// Input for one batch run
#[derive(Debug, Clone)]
pub struct RunOutreachInput {
    /// Raw input lines, one domain each; blank lines are ignored
    pub lines: Vec<String>,
    pub context: OutreachContext,
    pub config: PipelineConfig,
}

impl RunOutreachInput {
    pub fn new(lines: Vec<String>, context: OutreachContext) -> Self {
        Self {
            lines,
            context,
            config: PipelineConfig::default(),
        }
    }

    /// Split newline-separated text into input lines
    pub fn from_text(text: &str, context: OutreachContext) -> Self {
        Self::new(text.lines().map(str::to_string).collect(), context)
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }
}

/// A domain that produced no result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFailure {
    /// 1-based input line number
    pub line: usize,
    /// The input line as given (trimmed)
    pub input: String,
    /// Canonical host, when the line could be parsed
    pub host: Option<String>,
    pub error: RunOutreachError,
}

impl DomainFailure {
    /// Host if known, otherwise the raw input
    pub fn label(&self) -> &str {
        self.host.as_deref().unwrap_or(&self.input)
    }
}

/// Everything a batch produced, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub results: Vec<OutreachResult>,
    pub failures: Vec<DomainFailure>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.results.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.failures.is_empty()
    }
}

/// Use case for running the outreach pipeline over many domains
pub struct RunOutreachUseCase<F: PageFetcher + 'static, G: TextGenerator + 'static> {
    fetcher: Arc<F>,
    generator: Arc<G>,
}

impl<F: PageFetcher + 'static, G: TextGenerator + 'static> RunOutreachUseCase<F, G> {
    pub fn new(fetcher: Arc<F>, generator: Arc<G>) -> Self {
        Self { fetcher, generator }
    }

    /// Execute the batch with default (no-op) progress and no cancellation
    pub async fn execute(&self, input: RunOutreachInput) -> BatchOutcome {
        self.execute_with_progress(input, &NoProgress, CancellationToken::new())
            .await
    }

    /// Execute the batch with progress callbacks.
    ///
    /// Cancelling `cancel` stops domains that have not finished yet; they
    /// are reported as [`RunOutreachError::Cancelled`].
    pub async fn execute_with_progress(
        &self,
        input: RunOutreachInput,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> BatchOutcome {
        let RunOutreachInput {
            lines,
            context,
            config,
        } = input;

        let mut failures = Vec::new();
        let mut targets = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            match DomainTarget::parse(line) {
                Ok(Some(target)) => targets.push((index, target)),
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping line {}: {}", index + 1, e);
                    failures.push(DomainFailure {
                        line: index + 1,
                        input: line.trim().to_string(),
                        host: None,
                        error: e.into(),
                    });
                }
            }
        }

        info!(
            "Starting outreach for {} domain(s), concurrency {}",
            targets.len(),
            config.concurrency
        );
        progress.on_batch_start(targets.len());

        let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
        let context = Arc::new(context);
        let config = Arc::new(config);
        let mut join_set = JoinSet::new();

        for (index, target) in targets {
            let fetcher = Arc::clone(&self.fetcher);
            let generator = Arc::clone(&self.generator);
            let context = Arc::clone(&context);
            let config = Arc::clone(&config);
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();

            join_set.spawn(async move {
                let work = async {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => Err(RunOutreachError::Cancelled),
                        result = async {
                            let Ok(_permit) = semaphore.acquire_owned().await else {
                                return Err(RunOutreachError::Cancelled);
                            };
                            Self::process_target(&fetcher, &generator, &context, &config, &target)
                                .await
                        } => result,
                    }
                };
                let result = AssertUnwindSafe(work)
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|payload| {
                        Err(RunOutreachError::Panicked(panic_message(payload.as_ref())))
                    });
                (index, target, result)
            });
        }

        let mut completed = Vec::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, target, Ok(result))) => {
                    info!(
                        "{}: done (recipient: {})",
                        target.host(),
                        result.recipient().unwrap_or("none")
                    );
                    progress.on_domain_complete(target.host(), true);
                    completed.push((index, result));
                }
                Ok((index, target, Err(e))) => {
                    error!("{}: {}", target.host(), e);
                    progress.on_domain_complete(target.host(), false);
                    failures.push(DomainFailure {
                        line: index + 1,
                        input: target.raw().to_string(),
                        host: Some(target.host().to_string()),
                        error: e,
                    });
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        completed.sort_by_key(|(index, _)| *index);
        failures.sort_by_key(|failure| failure.line);

        let outcome = BatchOutcome {
            results: completed.into_iter().map(|(_, result)| result).collect(),
            failures,
        };

        info!(
            "Outreach finished: {} succeeded, {} failed",
            outcome.succeeded(),
            outcome.failed()
        );
        progress.on_batch_complete(outcome.succeeded(), outcome.failed());
        outcome
    }

    /// Run one domain through fetch, harvest, draft and select
    async fn process_target(
        fetcher: &Arc<F>,
        generator: &Arc<G>,
        context: &OutreachContext,
        config: &PipelineConfig,
        target: &DomainTarget,
    ) -> Result<OutreachResult, RunOutreachError> {
        let host = target.host();

        info!("{}: fetching {}", host, target.url());
        let fetched = fetcher.fetch(target.parsed_url()).await?;
        let page = PageSnapshot::from_markup(fetched.url, fetched.body);

        let candidates = HarvestContactsUseCase::new(Arc::clone(fetcher))
            .with_max_contact_pages(config.max_contact_pages)
            .execute(&page)
            .await;

        let drafter =
            DraftOutreachUseCase::new(Arc::clone(generator)).with_excerpt_chars(config.excerpt_chars);
        let body = drafter.draft(host, &page, context).await?;
        let selection = drafter
            .select_recipient(host, &candidates, &body, context)
            .await?;

        Ok(OutreachResult::new(
            host,
            target.url(),
            body,
            selection,
            candidates,
        ))
    }
}

/// Text of a panic payload, when it carries one
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
