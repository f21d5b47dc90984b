//! Test support: logging setup and in-memory fakes for the transport and terminal

use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{ApiRequest, HttpTransport, Prompter, TransportFactory};
use crate::infrastructure::{InfraResult, TransportError};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = env::var("RUST_LOG")
        .ok()
        .and_then(|_| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Transport that records every request and replays queued responses.
///
/// With nothing queued, a request gets an empty success envelope.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<Value, (u16, String)>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON body for the next request.
    pub fn respond(&self, body: Value) -> &Self {
        self.lock_responses().push_back(Ok(body));
        self
    }

    /// Queue an HTTP error for the next request.
    pub fn fail(&self, status: u16, message: &str) -> &Self {
        self.lock_responses()
            .push_back(Err((status, message.to_string())));
        self
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Value, (u16, String)>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HttpTransport for MockTransport {
    fn execute(&self, request: ApiRequest) -> Result<Value, TransportError> {
        debug!("mock: {} {}", request.method, request.path);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        match self.lock_responses().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err((status, message))) => Err(TransportError::Status { status, message }),
            None => Ok(serde_json::json!({"status": "success", "message": ""})),
        }
    }
}

/// Factory handing out one shared [`MockTransport`]; counts connects.
pub struct MockTransportFactory {
    pub transport: Arc<MockTransport>,
    connects: AtomicUsize,
}

impl MockTransportFactory {
    pub fn new(transport: Arc<MockTransport>) -> Arc<Self> {
        Arc::new(Self {
            transport,
            connects: AtomicUsize::new(0),
        })
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl TransportFactory for MockTransportFactory {
    fn connect(&self, base_url: &str, _token: &str) -> InfraResult<Arc<dyn HttpTransport>> {
        debug!("mock connect: {}", base_url);
        self.connects.fetch_add(1, Ordering::SeqCst);
        let transport: Arc<dyn HttpTransport> = self.transport.clone();
        Ok(transport)
    }
}

/// Scripted answer to a confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Simulates end of input
    Fail,
}

/// Prompter that answers from a script and counts questions.
pub struct ScriptedPrompter {
    answer: Answer,
    secrets: Mutex<VecDeque<String>>,
    asked: AtomicUsize,
}

impl ScriptedPrompter {
    pub fn new(answer: Answer) -> Arc<Self> {
        Self::with_secrets(answer, &[])
    }

    /// Secrets are handed out in order; running out is an end-of-input error.
    pub fn with_secrets(answer: Answer, secrets: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            answer,
            secrets: Mutex::new(secrets.iter().map(|s| s.to_string()).collect()),
            asked: AtomicUsize::new(0),
        })
    }

    /// Number of confirmations and secret reads so far.
    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _question: &str) -> io::Result<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Fail => Err(end_of_input()),
        }
    }

    fn read_secret(&self, _prompt: &str) -> io::Result<String> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.secrets
            .lock()
            .ok()
            .and_then(|mut secrets| secrets.pop_front())
            .ok_or_else(end_of_input)
    }
}
