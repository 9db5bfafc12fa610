//! Draft outreach use case
//!
//! Two generation calls per domain:
//!
//! 1. **Outreach**: a personalized backlink email built from the page's
//!    title, description and paragraph excerpt, signed with the sender profile
//! 2. **Selection**: given the harvested addresses and the draft, pick the
//!    single best recipient

use crate::config::OutreachContext;
use crate::ports::text_generator::{GenerationError, TextGenerator};
use outreach_domain::{
    CandidateEmailSet, GenerationRequest, Message, PageSnapshot, PromptTemplate,
    RecipientSelection, SiteSummary,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for generating the outreach body and choosing a recipient
pub struct DraftOutreachUseCase<G: TextGenerator + 'static> {
    generator: Arc<G>,
    excerpt_chars: usize,
}

impl<G: TextGenerator + 'static> DraftOutreachUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            excerpt_chars: 500,
        }
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    /// Generate the outreach body for one page.
    ///
    /// Missing title or description are passed as empty strings. The reply
    /// is trimmed; an empty reply is an error.
    pub async fn draft(
        &self,
        host: &str,
        page: &PageSnapshot,
        context: &OutreachContext,
    ) -> Result<String, GenerationError> {
        let site = SiteSummary {
            host,
            title: page.title(),
            description: page.description(),
            excerpt: page.excerpt(self.excerpt_chars),
        };
        let settings = &context.generation;
        let request = GenerationRequest::new(
            &settings.model,
            settings.outreach_max_tokens,
            settings.temperature,
        )
        .message(Message::user(PromptTemplate::outreach_prompt(
            &site,
            &context.sender,
        )));

        info!("{}: generating outreach", host);
        let reply = self.generator.generate(&request).await?;
        let body = reply.trim();
        if body.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(body.to_string())
    }

    /// Ask which harvested address should receive `draft`.
    ///
    /// Skips the call when there are no candidates. A reply that is not one
    /// of the candidates becomes [`RecipientSelection::Rejected`].
    pub async fn select_recipient(
        &self,
        host: &str,
        candidates: &CandidateEmailSet,
        draft: &str,
        context: &OutreachContext,
    ) -> Result<RecipientSelection, GenerationError> {
        if candidates.is_empty() {
            debug!("{}: no candidates, skipping selection", host);
            return Ok(RecipientSelection::NoCandidates);
        }

        let settings = &context.generation;
        let request = GenerationRequest::new(
            &settings.model,
            settings.selection_max_tokens,
            settings.temperature,
        )
        .message(Message::user(PromptTemplate::selection_prompt(
            host,
            &candidates.joined(),
        )))
        .message(Message::assistant(draft));

        info!("{}: selecting recipient from {} candidate(s)", host, candidates.len());
        let reply = self.generator.generate(&request).await?;
        let selection = RecipientSelection::from_reply(&reply, candidates);

        if let RecipientSelection::Rejected { suggestion } = &selection {
            debug!("{}: selector suggested {:?}, not a candidate", host, suggestion);
        }

        Ok(selection)
    }
}
