//! Batch Operations Example
//!
//! Queues several calls, drains them five at a time and prints one line per
//! outcome. A failing call (here: an article id that does not exist) shows
//! up as a failed outcome without affecting the others.
//!
//! Usage:
//!   cargo run --example batch_operations

use billbee_rs::types::{Article, CloudStorage};
use billbee_rs::{ApiResponse, BillbeeClient, LookupBy, PageOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("billbee_rs=info")),
        )
        .init();

    let client = BillbeeClient::from_env()?;

    client.enter_queued_mode();
    let article = client.articles().get(1, LookupBy::Id).await?;
    let missing = client.articles().get(-1, LookupBy::Id).await?;
    let storages = client.cloud_storages().list().await?;
    let _ = client.customers().list(PageOptions::new(1, 5)).await?;
    let _ = client.enums().order_states().await?;
    let _ = client.layouts().list().await?;
    let _ = client.events().list(&Default::default()).await?;
    println!("queued {} requests", client.pending_count());

    let report = client.drain_report().await;
    client.exit_queued_mode();

    for (i, outcome) in report.outcomes.iter().enumerate() {
        match outcome.failure_reason() {
            None => println!("#{i} ok ({})", outcome.status_code()),
            Some(reason) => println!("#{i} failed ({}): {reason}", outcome.status_code()),
        }
    }
    println!(
        "{}/{} succeeded in {:?}",
        report.success_count(),
        report.len(),
        report.execution_time
    );

    // Queued replies carry the slot their outcome landed in.
    if let Some(i) = article.queued_index() {
        if let Ok(resp) = report.outcomes[i].decode::<ApiResponse<Article>>() {
            println!("article #1: {:?}", resp.data.and_then(|a| a.title));
        }
    }
    if let Some(i) = missing.queued_index() {
        println!("article #-1 succeeded: {}", report.outcomes[i].succeeded());
    }
    if let Some(i) = storages.queued_index() {
        let resp: ApiResponse<Vec<CloudStorage>> = report.outcomes[i].decode()?;
        println!("{} cloud storages", resp.data.map(|s| s.len()).unwrap_or(0));
    }

    Ok(())
}
