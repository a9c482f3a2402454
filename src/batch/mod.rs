//! Queued request execution.
//!
//! # Request Batching
//!
//! A client normally sends each call as it is made. After
//! [`BatchController::enter_queued_mode`] every call is recorded as a
//! [`RequestDescriptor`] instead, and the caller immediately gets back a
//! [`Reply::Queued`] holding the call's position. [`BatchController::drain`]
//! then executes the whole queue and returns one [`BatchOutcome`] per call,
//! in the order the calls were made.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`RequestDescriptor`] | Immutable method + path + body of one call |
//! | [`BatchController`] | Mode switch and owner of the pending queue |
//! | [`BatchExecutor`] | Runs a queue in order-preserving concurrency groups |
//! | [`BatchOutcome`] | Success or failure of one queued call, never an `Err` |
//! | [`Reply`] | What a dispatched call returned: a value or a queue slot |
//!
//! ## Execution
//!
//! The queue is cut into consecutive groups of [`DEFAULT_CONCURRENCY`]
//! requests. Requests inside a group run concurrently; the next group starts
//! only after every request of the current one has settled. A failed request
//! yields a failed outcome and never cancels its siblings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use billbee_rs::{BillbeeClient, OrderListOptions};
//!
//! # async fn run(client: BillbeeClient) -> billbee_rs::Result<()> {
//! client.enter_queued_mode();
//! let _ = client.articles().list(&Default::default()).await?;
//! let _ = client.orders().list(&OrderListOptions::default()).await?;
//!
//! for outcome in client.drain().await {
//!     match outcome.failure_reason() {
//!         None => println!("ok ({})", outcome.status_code()),
//!         Some(reason) => println!("failed: {reason}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod controller;
mod executor;
mod outcome;
mod reply;
mod request;

pub use controller::BatchController;
pub use executor::{BatchExecutor, BatchExecutorConfig, BatchStrategy, DEFAULT_CONCURRENCY};
pub use outcome::{BatchOutcome, BatchReport};
pub use reply::Reply;
pub use request::{HttpMethod, RequestDescriptor};
