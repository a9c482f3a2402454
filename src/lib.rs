//! # billbee-rs
//!
//! Typed async client for the Billbee e-commerce back-office REST API.
//!
//! ## Overview
//!
//! Every resource family (articles, orders, customers, events, ...) is a
//! facade borrowed from a [`BillbeeClient`]. Calls go out immediately by
//! default. In queued mode they are recorded instead and executed together
//! by [`BillbeeClient::drain`], five at a time, with one outcome per call in
//! call order. A failing call never aborts the rest of the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use billbee_rs::{BillbeeClient, LookupBy, OrderListOptions};
//!
//! #[tokio::main]
//! async fn main() -> billbee_rs::Result<()> {
//!     let client = BillbeeClient::builder()
//!         .username("shop@example.com")
//!         .api_password("api-password")
//!         .api_key("api-key")
//!         .build()?;
//!
//!     // Immediate mode
//!     let article = client.articles().get("SKU-1", LookupBy::Sku).await?;
//!     println!("{:?}", article.completed().and_then(|r| r.data));
//!
//!     // Queued mode
//!     client.enter_queued_mode();
//!     let _ = client.orders().list(&OrderListOptions::default()).await?;
//!     let _ = client.customers().get(42).await?;
//!     for outcome in client.drain().await {
//!         println!("{} -> {}", outcome.status_code(), outcome.succeeded());
//!     }
//!     client.exit_queued_mode();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client session and builder |
//! | [`batch`] | Queued mode, batch execution, outcomes |
//! | [`endpoints`] | Resource facades |
//! | [`transport`] | Dispatcher seam and the HTTP implementation |
//! | [`types`] | Wire records and enums |
//! | [`config`] | Credentials and connection settings |

pub mod batch;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod transport;
pub mod types;

pub use batch::{BatchOutcome, BatchReport, HttpMethod, Reply, RequestDescriptor};
pub use client::{BillbeeClient, BillbeeClientBuilder};
pub use config::BillbeeConfig;
pub use endpoints::{
    ApiReply, ArticleListOptions, ArticleTitleSource, CreateDeliveryNoteOptions,
    CreateInvoiceOptions, EventListOptions, InvoiceListOptions, LookupBy, OrderListOptions,
    PageOptions, ReservedAmountOptions,
};
pub use transport::{DispatchResponse, Dispatcher};
pub use types::{ApiResponse, PagedApiResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, NO_RESPONSE_STATUS};
