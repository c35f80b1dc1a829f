//! Best-effort visitor and hit counters.
//!
//! Counts are fetched once on a background thread and delivered over a
//! channel that the event loop polls. Any failure shows the fallback literal;
//! nothing is retried and no error reaches the caller.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::CounterConfig;
use crate::constants::COUNTER_FALLBACK;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A source of a single count.
pub trait CounterService: Send + 'static {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches the current count.
    fn fetch(&self) -> Result<u64>;
}

/// Counter backed by JSON HTTP endpoints.
///
/// When `increment_url` is set it is called first and its response ignored;
/// the count is read from `fetch_url`.
#[derive(Debug, Clone)]
pub struct HttpCounter {
    name: String,
    increment_url: Option<String>,
    fetch_url: String,
}

impl HttpCounter {
    /// Counter for an arbitrary endpoint pair.
    pub fn new(name: impl Into<String>, increment_url: Option<String>, fetch_url: String) -> Self {
        Self {
            name: name.into(),
            increment_url,
            fetch_url,
        }
    }

    /// Unique visitor counter: increment, then read the total.
    pub fn visitors(config: &CounterConfig) -> Self {
        Self::new(
            "visitors",
            Some(config.visitor_increment_url.clone()),
            config.visitor_fetch_url.clone(),
        )
    }

    /// Page hit counter: a single call that counts and returns the total.
    pub fn hits(config: &CounterConfig) -> Self {
        Self::new("hits", None, config.hit_url.clone())
    }

    fn client() -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")
    }
}

impl CounterService for HttpCounter {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<u64> {
        let client = Self::client()?;

        if let Some(url) = &self.increment_url {
            client
                .get(url)
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .with_context(|| format!("increment {url}"))?;
        }

        let body = client
            .get(&self.fetch_url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("fetch {}", self.fetch_url))?
            .json::<serde_json::Value>()
            .with_context(|| format!("parse {}", self.fetch_url))?;

        parse_count(&body)
    }
}

/// Extracts the `count` (or `value`) number from a counter response.
pub fn parse_count(body: &serde_json::Value) -> Result<u64> {
    body.get("count")
        .or_else(|| body.get("value"))
        .and_then(serde_json::Value::as_u64)
        .context("counter response has no 'count' or 'value' number")
}

/// Fetches synchronously and formats the result, falling back on error.
pub fn fetch_display(service: &dyn CounterService) -> String {
    match service.fetch() {
        Ok(count) => count.to_string(),
        Err(e) => {
            tracing::warn!("{} counter unavailable: {e:#}", service.name());
            COUNTER_FALLBACK.to_string()
        }
    }
}

/// State of a background fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    /// No result yet
    Pending,
    /// Count delivered
    Ready(u64),
    /// Fetch failed or the worker went away
    Unavailable,
}

/// Receiving end of a background counter fetch.
///
/// Dropping the handle clears the liveness flag, after which the worker
/// never delivers.
#[derive(Debug)]
pub struct CounterHandle {
    receiver: Option<Receiver<Option<u64>>>,
    alive: Arc<AtomicBool>,
    state: CounterState,
}

impl CounterHandle {
    /// Drains the channel.
    ///
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.state = result.map_or(CounterState::Unavailable, CounterState::Ready);
                self.receiver = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.state = CounterState::Unavailable;
                self.receiver = None;
                true
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Text for the footer: the count, or the fallback literal.
    pub fn display(&self) -> String {
        match self.state {
            CounterState::Ready(count) => count.to_string(),
            CounterState::Pending | CounterState::Unavailable => COUNTER_FALLBACK.to_string(),
        }
    }
}

impl Drop for CounterHandle {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

/// Starts a one-shot fetch on a background thread.
pub fn spawn_counter<S: CounterService>(service: S) -> CounterHandle {
    let (sender, receiver) = channel();
    let alive = Arc::new(AtomicBool::new(true));
    let worker_alive = Arc::clone(&alive);

    thread::spawn(move || {
        let result = match service.fetch() {
            Ok(count) => {
                tracing::debug!("{} counter: {count}", service.name());
                Some(count)
            }
            Err(e) => {
                tracing::warn!("{} counter unavailable: {e:#}", service.name());
                None
            }
        };

        if worker_alive.load(Ordering::SeqCst) {
            let _ = sender.send(result);
        }
    });

    CounterHandle {
        receiver: Some(receiver),
        alive,
        state: CounterState::Pending,
    }
}

/// A handle that never resolves, used when counters are disabled.
pub fn disabled_counter() -> CounterHandle {
    CounterHandle {
        receiver: None,
        alive: Arc::new(AtomicBool::new(false)),
        state: CounterState::Unavailable,
    }
}
