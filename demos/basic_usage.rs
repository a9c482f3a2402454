//! Basic Usage Example
//!
//! Reads credentials from `BILLBEE_USERNAME`, `BILLBEE_API_PASSWORD` and
//! `BILLBEE_API_KEY` (the password may instead live in the OS keyring under
//! service `billbee`), then fetches a few records in immediate mode.
//!
//! Usage:
//!   RUST_LOG=billbee_rs=debug cargo run --example basic_usage

use billbee_rs::{ArticleListOptions, BillbeeClient, OrderListOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("billbee_rs=info")),
        )
        .init();

    let client = BillbeeClient::from_env()?;

    let articles = client
        .articles()
        .list(&ArticleListOptions {
            page_size: Some(10),
            ..Default::default()
        })
        .await?;
    if let Some(response) = articles.completed() {
        let paging = response.paging.clone().unwrap_or_default();
        for article in response.into_result()?.unwrap_or_default() {
            println!(
                "{:>8}  {:<20} {}",
                article.id.unwrap_or_default(),
                article.sku.unwrap_or_default(),
                article.title.unwrap_or_default()
            );
        }
        println!("page {} of {}", paging.page, paging.total_pages);
    }

    let orders = client
        .orders()
        .list(&OrderListOptions {
            page_size: Some(5),
            ..Default::default()
        })
        .await?;
    if let Some(response) = orders.completed() {
        for order in response.into_result()?.unwrap_or_default() {
            println!(
                "order {} state {:?}",
                order.order_number.unwrap_or_default(),
                order.state
            );
        }
    }

    Ok(())
}
