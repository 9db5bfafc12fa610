//! Web access adapters
//!
//! [`HttpPageFetcher`] implements the application's
//! [`PageFetcher`](outreach_application::PageFetcher) port with `reqwest`:
//! a single GET per call with a timeout, a `User-Agent`, a redirect limit
//! and a body size cap.

mod fetcher;

pub use fetcher::{FetchOptions, HttpPageFetcher, MAX_BODY_SIZE, MAX_REDIRECTS};
