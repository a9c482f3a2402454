use crate::batch::{BatchController, BatchOutcome, BatchReport, HttpMethod, Reply, RequestDescriptor};
use crate::client::builder::BillbeeClientBuilder;
use crate::config::BillbeeConfig;
use crate::endpoints::{
    Articles, CloudStorages, CustomerAddresses, Customers, Enums, Events, Layouts, Orders,
    Provisioning,
};
use crate::transport::Dispatcher;
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// A Billbee API session.
///
/// Owns one [`Dispatcher`] and one [`BatchController`]; every facade borrows
/// the client, so all of them observe the same immediate/queued mode. Clients
/// are independent of each other.
pub struct BillbeeClient {
    controller: BatchController,
}

impl BillbeeClient {
    pub fn builder() -> BillbeeClientBuilder {
        BillbeeClientBuilder::new()
    }

    /// HTTP client for the given configuration.
    pub fn new(config: BillbeeConfig) -> Result<Self> {
        BillbeeClientBuilder::new().config(config).build()
    }

    /// HTTP client configured from `BILLBEE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(BillbeeConfig::from_env()?)
    }

    /// Client that routes every call through `dispatcher`.
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self::from_controller(BatchController::new(dispatcher))
    }

    pub(crate) fn from_controller(controller: BatchController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &BatchController {
        &self.controller
    }

    pub fn enter_queued_mode(&self) {
        self.controller.enter_queued_mode();
    }

    pub fn exit_queued_mode(&self) {
        self.controller.exit_queued_mode();
    }

    /// Switch modes; anything still queued is discarded.
    pub fn set_queued_mode(&self, on: bool) {
        self.controller.set_queued_mode(on);
    }

    pub fn is_queued_mode(&self) -> bool {
        self.controller.is_queued_mode()
    }

    pub fn pending_count(&self) -> usize {
        self.controller.pending_count()
    }

    /// Run every queued request; one outcome per request, in call order.
    pub async fn drain(&self) -> Vec<BatchOutcome> {
        self.controller.drain().await
    }

    /// Same as [`drain`](Self::drain).
    pub async fn execute_batch(&self) -> Vec<BatchOutcome> {
        self.drain().await
    }

    /// [`drain`](Self::drain) plus timing and success counts.
    pub async fn drain_report(&self) -> BatchReport {
        self.controller.drain_report().await
    }

    /// Raw call against any path below the base URL.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<Value>,
    ) -> Result<Reply<Value>> {
        self.send(RequestDescriptor::new(method, path, body)).await
    }

    pub async fn send(&self, request: RequestDescriptor) -> Result<Reply<Value>> {
        self.controller.dispatch(request).await
    }

    /// [`send`](Self::send) and decode a completed body into `T`.
    pub async fn request<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<Reply<T>> {
        self.send(request)
            .await?
            .try_map(|body| Ok(serde_json::from_value(body)?))
    }

    pub fn articles(&self) -> Articles<'_> {
        Articles::new(self)
    }

    /// Alias of [`articles`](Self::articles); the API calls them products.
    pub fn products(&self) -> Articles<'_> {
        self.articles()
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn customer_addresses(&self) -> CustomerAddresses<'_> {
        CustomerAddresses::new(self)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    pub fn enums(&self) -> Enums<'_> {
        Enums::new(self)
    }

    pub fn cloud_storages(&self) -> CloudStorages<'_> {
        CloudStorages::new(self)
    }

    pub fn layouts(&self) -> Layouts<'_> {
        Layouts::new(self)
    }

    pub fn provisioning(&self) -> Provisioning<'_> {
        Provisioning::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::DispatchResponse;
    use async_trait::async_trait;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Dispatcher for Echo {
        async fn dispatch(&self, request: &RequestDescriptor) -> Result<DispatchResponse> {
            Ok(DispatchResponse::ok(json!({
                "method": request.method().as_str(),
                "path": request.path(),
            })))
        }
    }

    #[tokio::test]
    async fn immediate_dispatch_returns_body() {
        let client = BillbeeClient::with_dispatcher(Arc::new(Echo));
        let reply = client.dispatch(HttpMethod::Get, "/x", None).await.unwrap();
        assert_eq!(
            reply.completed(),
            Some(json!({"method": "GET", "path": "/x"}))
        );
        assert_eq!(client.pending_count(), 0);
    }

    #[tokio::test]
    async fn typed_request_decodes() {
        #[derive(serde::Deserialize)]
        struct Echoed {
            path: String,
        }
        let client = BillbeeClient::with_dispatcher(Arc::new(Echo));
        let reply: Reply<Echoed> = client.request(RequestDescriptor::get("/typed")).await.unwrap();
        assert_eq!(reply.completed().unwrap().path, "/typed");
    }

    #[tokio::test]
    async fn execute_batch_is_drain() {
        let client = BillbeeClient::with_dispatcher(Arc::new(Echo));
        client.enter_queued_mode();
        let reply = client.dispatch(HttpMethod::Delete, "/q", None).await.unwrap();
        assert_eq!(reply.queued_index(), Some(0));
        let outcomes = client.execute_batch().await;
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].succeeded());
        assert_eq!(client.pending_count(), 0);
    }
}
