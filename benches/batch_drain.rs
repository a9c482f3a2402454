//! Benchmarks for queued-mode overhead
//!
//! This benchmark measures:
//! - Enqueue cost per facade call in queued mode
//! - Drain throughput with an in-process dispatcher (no network)

use async_trait::async_trait;
use billbee_rs::batch::{BatchExecutor, RequestDescriptor};
use billbee_rs::{BillbeeClient, DispatchResponse, Dispatcher, HttpMethod, OrderListOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use std::sync::Arc;

struct NoopDispatcher;

#[async_trait]
impl Dispatcher for NoopDispatcher {
    async fn dispatch(&self, request: &RequestDescriptor) -> billbee_rs::Result<DispatchResponse> {
        Ok(DispatchResponse::ok(json!({
            "ErrorCode": 0,
            "Data": { "Path": request.path() }
        })))
    }
}

fn bench_enqueue(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let client = BillbeeClient::with_dispatcher(Arc::new(NoopDispatcher));
    let options = OrderListOptions {
        tag: vec!["gift".into(), "express".into()],
        shop_id: vec![1, 2, 3],
        ..Default::default()
    };

    c.bench_function("enqueue_order_list", |b| {
        b.to_async(&rt).iter(|| async {
            client.enter_queued_mode();
            let reply = client.orders().list(black_box(&options)).await;
            black_box(reply.is_ok())
        })
    });
}

fn bench_drain(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("drain");

    for size in [5usize, 50, 500] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("client", size), &size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let client = BillbeeClient::with_dispatcher(Arc::new(NoopDispatcher));
                client.enter_queued_mode();
                for i in 0..size {
                    let _ = client
                        .dispatch(HttpMethod::Get, format!("/orders/{i}"), None)
                        .await;
                }
                black_box(client.drain().await.len())
            })
        });
    }

    let requests: Vec<_> = (0..500)
        .map(|i| RequestDescriptor::get(format!("/products/{i}")))
        .collect();
    let executor = BatchExecutor::new();
    group.bench_function("executor_500", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(executor.execute(&NoopDispatcher, &requests).await.len()) })
    });
    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain);
criterion_main!(benches);
