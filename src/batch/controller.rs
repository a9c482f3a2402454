//! Immediate / queued mode switch.

use super::executor::BatchExecutor;
use super::outcome::{BatchOutcome, BatchReport};
use super::reply::Reply;
use super::request::RequestDescriptor;
use crate::transport::Dispatcher;
use crate::{Error, Result};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct ModeState {
    queued_mode: bool,
    pending: Vec<RequestDescriptor>,
    draining: bool,
}

/// Gate every outbound call through immediate dispatch or the pending queue.
///
/// One controller belongs to one client. The lock is only ever held for
/// bookkeeping, never across an `.await`.
pub struct BatchController {
    dispatcher: Arc<dyn Dispatcher>,
    executor: BatchExecutor,
    state: Mutex<ModeState>,
}

impl BatchController {
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self::with_executor(dispatcher, BatchExecutor::new())
    }

    pub fn with_executor(dispatcher: Arc<dyn Dispatcher>, executor: BatchExecutor) -> Self {
        Self {
            dispatcher,
            executor,
            state: Mutex::new(ModeState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ModeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch modes. The pending queue is emptied every time, even when the
    /// mode does not change.
    pub fn set_queued_mode(&self, on: bool) {
        let mut state = self.state();
        let dropped = state.pending.len();
        state.queued_mode = on;
        state.pending.clear();
        if dropped > 0 {
            warn!(
                dropped,
                queued_mode = on,
                "discarding queued requests that were never drained"
            );
        }
    }

    pub fn enter_queued_mode(&self) {
        self.set_queued_mode(true);
    }

    pub fn exit_queued_mode(&self) {
        self.set_queued_mode(false);
    }

    pub fn is_queued_mode(&self) -> bool {
        self.state().queued_mode
    }

    pub fn pending_count(&self) -> usize {
        self.state().pending.len()
    }

    pub fn is_draining(&self) -> bool {
        self.state().draining
    }

    /// Send now, or queue and return the outcome slot without any I/O.
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<Reply<Value>> {
        {
            let mut state = self.state();
            if state.queued_mode {
                if state.draining {
                    return Err(Error::DrainInProgress);
                }
                debug!(request = %request, position = state.pending.len(), "request queued");
                state.pending.push(request);
                return Ok(Reply::Queued {
                    index: state.pending.len() - 1,
                });
            }
        }

        let response = self.dispatcher.dispatch(&request).await?;
        Ok(Reply::Completed(response.body))
    }

    /// Execute everything queued and return one outcome per request, in
    /// submission order.
    ///
    /// Returns an empty list without touching the network when not in queued
    /// mode, when nothing is queued, or when another drain is running.
    pub async fn drain(&self) -> Vec<BatchOutcome> {
        self.drain_report().await.outcomes
    }

    pub async fn drain_report(&self) -> BatchReport {
        let snapshot = {
            let mut state = self.state();
            if !state.queued_mode || state.pending.is_empty() {
                return BatchReport::empty();
            }
            if state.draining {
                warn!("drain requested while another drain is in progress");
                return BatchReport::empty();
            }
            state.draining = true;
            state.pending.clone()
        };

        let mut guard = DrainGuard {
            controller: self,
            finished: false,
        };
        let report = self
            .executor
            .execute(self.dispatcher.as_ref(), &snapshot)
            .await;
        guard.finished = true;
        report
    }
}

/// Ends a drain: empties the queue and resets the draining flag, also when
/// the drain future is dropped midway. Part of the snapshot may already have
/// been sent by then, so none of it is kept for the next drain.
struct DrainGuard<'a> {
    controller: &'a BatchController,
    finished: bool,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.controller.state();
        if !self.finished {
            warn!(
                discarded = state.pending.len(),
                "drain cancelled before completion; queued requests discarded"
            );
        }
        state.pending.clear();
        state.draining = false;
    }
}
