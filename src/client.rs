//! Billbee client session.
//!
//! [`BillbeeClient`] is the entry point: it hands out the resource facades
//! and exposes the queued-mode switch. Construction lives in [`builder`].

pub mod builder;
pub mod core;

pub use builder::BillbeeClientBuilder;
pub use core::BillbeeClient;
