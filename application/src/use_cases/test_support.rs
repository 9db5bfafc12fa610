//! Hand-written port mocks shared by the use case tests

use crate::ports::mail_transport::{MailTransport, TransportError};
use crate::ports::page_fetcher::{FetchError, FetchedPage, PageFetcher};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use outreach_domain::{GenerationRequest, MailJob, TransportConfig};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use url::Url;

/// Serves fixed bodies keyed by URL; unknown URLs fail with HTTP 404
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, Result<String, FetchError>>,
    pub requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(normalize(url), Ok(body.to_string()));
        self
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(normalize(url), Err(error));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

fn normalize(url: &str) -> String {
    Url::parse(url).unwrap().to_string()
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(Ok(body)) => Ok(FetchedPage::new(url.clone(), body.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

type Reply = Box<dyn Fn(&GenerationRequest) -> Result<String, GenerationError> + Send + Sync>;

/// Answers generation requests through a closure and records every request
pub struct MockGenerator {
    reply: Reply,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new(
        reply: impl Fn(&GenerationRequest) -> Result<String, GenerationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies in order, regardless of the request
    pub fn scripted(replies: Vec<Result<String, GenerationError>>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        Self::new(move |_| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))
        })
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.reply)(request)
    }
}

/// Fails transports whose password is listed, succeeds otherwise
#[derive(Default)]
pub struct MockMailTransport {
    bad_passwords: Vec<String>,
    unreachable: Vec<String>,
    pub sent: Mutex<Vec<(String, MailJob)>>,
}

impl MockMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_password(mut self, password: &str) -> Self {
        self.bad_passwords.push(password.to_string());
        self
    }

    pub fn unreachable_server(mut self, server: &str) -> Self {
        self.unreachable.push(server.to_string());
        self
    }

    fn connect(&self, transport: &TransportConfig) -> Result<(), TransportError> {
        if self.unreachable.iter().any(|s| s == transport.server()) {
            return Err(TransportError::Connection(format!(
                "{}:{} refused",
                transport.server(),
                transport.port()
            )));
        }
        if self.bad_passwords.iter().any(|p| p == transport.password()) {
            return Err(TransportError::Authentication(
                "535 authentication failed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, transport: &TransportConfig, job: &MailJob) -> Result<(), TransportError> {
        self.connect(transport)?;
        if !outreach_domain::is_email_shaped(&job.recipient) {
            return Err(TransportError::InvalidAddress(job.recipient.clone()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((transport.describe(), job.clone()));
        Ok(())
    }

    async fn check(&self, transport: &TransportConfig) -> Result<(), TransportError> {
        self.connect(transport)
    }
}
