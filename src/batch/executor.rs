//! Batch executor.

use super::outcome::{BatchOutcome, BatchReport};
use super::request::RequestDescriptor;
use crate::transport::{Dispatcher, TransportError};
use crate::Error;
use futures::future::join_all;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Requests in flight at once during a drain.
pub const DEFAULT_CONCURRENCY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStrategy {
    /// All requests in a single concurrent group.
    Parallel,
    /// One request at a time.
    Sequential,
    /// Consecutive groups of at most `max_concurrency`, one group after another.
    Concurrent { max_concurrency: usize },
}
impl Default for BatchStrategy {
    fn default() -> Self {
        BatchStrategy::Concurrent {
            max_concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
impl BatchStrategy {
    fn group_size(&self, total: usize) -> usize {
        match self {
            BatchStrategy::Parallel => total.max(1),
            BatchStrategy::Sequential => 1,
            BatchStrategy::Concurrent { max_concurrency } => (*max_concurrency).max(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchExecutorConfig {
    pub strategy: BatchStrategy,
    /// Extra per-item deadline on top of the transport timeout.
    pub item_timeout: Option<Duration>,
}
impl BatchExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(mut self, s: BatchStrategy) -> Self {
        self.strategy = s;
        self
    }
    pub fn with_item_timeout(mut self, t: Duration) -> Self {
        self.item_timeout = Some(t);
        self
    }
}

/// Runs descriptors in order-preserving concurrency groups.
///
/// Groups run strictly one after another; inside a group every call is
/// awaited to completion even when siblings fail. The executor never
/// returns an error: each failure becomes a [`BatchOutcome::Failure`] at
/// its request's index.
#[derive(Debug, Clone, Default)]
pub struct BatchExecutor {
    config: BatchExecutorConfig,
}
impl BatchExecutor {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: BatchExecutorConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &BatchExecutorConfig {
        &self.config
    }

    pub async fn execute<D>(&self, dispatcher: &D, requests: &[RequestDescriptor]) -> BatchReport
    where
        D: Dispatcher + ?Sized,
    {
        if requests.is_empty() {
            return BatchReport::empty();
        }

        let start = Instant::now();
        let group_size = self.config.strategy.group_size(requests.len());
        let mut outcomes = Vec::with_capacity(requests.len());

        for (group, chunk) in requests.chunks(group_size).enumerate() {
            debug!(group, size = chunk.len(), "executing batch group");
            // join_all yields results in input order, not completion order.
            let settled = join_all(chunk.iter().map(|r| self.execute_one(dispatcher, r))).await;
            outcomes.extend(settled);
        }

        let report = BatchReport {
            outcomes,
            execution_time: start.elapsed(),
        };
        info!(
            total = report.len(),
            succeeded = report.success_count(),
            failed = report.failure_count(),
            elapsed_ms = report.execution_time.as_millis() as u64,
            "batch executed"
        );
        report
    }

    async fn execute_one<D>(&self, dispatcher: &D, request: &RequestDescriptor) -> BatchOutcome
    where
        D: Dispatcher + ?Sized,
    {
        let call = dispatcher.dispatch(request);
        let result = match self.config.item_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(r) => r,
                Err(_) => Err(Error::Transport(TransportError::Timeout(limit))),
            },
            None => call.await,
        };
        match result {
            Ok(response) => BatchOutcome::success(response.status, response.body),
            Err(e) => {
                debug!(request = %request, error = %e, "queued request failed");
                BatchOutcome::from_error(&e)
            }
        }
    }
}
