//! Harvest contacts use case
//!
//! Collects every candidate address for one fetched page: the in-page passes
//! run in the domain layer, then up to `max_contact_pages` linked contact
//! pages are fetched concurrently and their visible text is merged in.

use crate::ports::page_fetcher::PageFetcher;
use futures::future::join_all;
use outreach_domain::{CandidateEmailSet, PageSnapshot, scan_contact_page, scan_markup};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for building the candidate address set of one domain
pub struct HarvestContactsUseCase<F: PageFetcher + 'static> {
    fetcher: Arc<F>,
    max_contact_pages: usize,
}

impl<F: PageFetcher + 'static> HarvestContactsUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            max_contact_pages: 3,
        }
    }

    pub fn with_max_contact_pages(mut self, max: usize) -> Self {
        self.max_contact_pages = max;
        self
    }

    /// Harvest addresses from the page and its contact pages.
    ///
    /// Never fails: a contact page that cannot be fetched is logged and
    /// contributes nothing.
    pub async fn execute(&self, page: &PageSnapshot) -> CandidateEmailSet {
        let scan = scan_markup(page.markup(), page.url(), self.max_contact_pages);
        let mut candidates = scan.candidates;

        debug!(
            "{}: {} address(es) in page, {} contact link(s)",
            page.url(),
            candidates.len(),
            scan.contact_links.len()
        );

        if scan.contact_links.is_empty() {
            return candidates;
        }

        let fetches = scan
            .contact_links
            .iter()
            .map(|link| self.fetcher.fetch(link));
        let responses = join_all(fetches).await;

        for (link, response) in scan.contact_links.iter().zip(responses) {
            match response {
                Ok(contact_page) => {
                    let found = scan_contact_page(&contact_page.body);
                    debug!("{}: {} address(es) on contact page", link, found.len());
                    candidates.merge(found);
                }
                Err(e) => {
                    warn!("Skipping contact page {}: {}", link, e);
                }
            }
        }

        candidates
    }
}
