use crate::batch::{BatchController, BatchExecutor, BatchExecutorConfig, BatchStrategy};
use crate::client::core::BillbeeClient;
use crate::config::BillbeeConfig;
use crate::transport::{Dispatcher, HttpTransport};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`BillbeeClient`].
///
/// Credentials can be given one by one or as a whole [`BillbeeConfig`]. A
/// custom [`Dispatcher`] replaces the HTTP transport entirely, in which case
/// no credentials are needed.
#[derive(Default)]
pub struct BillbeeClientBuilder {
    username: Option<String>,
    api_password: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy_url: Option<String>,
    config: Option<BillbeeConfig>,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    executor_config: Option<BatchExecutorConfig>,
}

impl BillbeeClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn api_password(mut self, password: impl Into<String>) -> Self {
        self.api_password = Some(password.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API root, e.g. to point at a mock server in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request network timeout (default 30 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Start from a complete configuration. Individually set fields still
    /// take precedence.
    pub fn config(mut self, config: BillbeeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Route every call through `dispatcher` instead of HTTP.
    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Tune how queued requests are drained.
    pub fn executor_config(mut self, config: BatchExecutorConfig) -> Self {
        self.executor_config = Some(config);
        self
    }

    /// Build the client.
    ///
    /// Without an explicit executor config, drain concurrency and per-item
    /// timeout can be set through the environment:
    /// - `BILLBEE_BATCH_CONCURRENCY` (default 5)
    /// - `BILLBEE_BATCH_ITEM_TIMEOUT_MS` (default: none)
    pub fn build(mut self) -> Result<BillbeeClient> {
        let executor_config = self
            .executor_config
            .take()
            .unwrap_or_else(executor_config_from_env);

        let dispatcher: Arc<dyn Dispatcher> = match self.dispatcher.take() {
            Some(dispatcher) => dispatcher,
            None => Arc::new(HttpTransport::new(&self.resolve_config())?),
        };

        let controller =
            BatchController::with_executor(dispatcher, BatchExecutor::with_config(executor_config));
        Ok(BillbeeClient::from_controller(controller))
    }

    fn resolve_config(self) -> BillbeeConfig {
        let mut config = self
            .config
            .unwrap_or_else(|| BillbeeConfig::new("", "", ""));
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.api_password {
            config.api_password = password;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        if let Some(proxy_url) = self.proxy_url {
            config = config.with_proxy_url(proxy_url);
        }
        config
    }
}

fn executor_config_from_env() -> BatchExecutorConfig {
    let mut config = BatchExecutorConfig::new();
    if let Some(n) = std::env::var("BILLBEE_BATCH_CONCURRENCY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
    {
        config = config.with_strategy(BatchStrategy::Concurrent {
            max_concurrency: n.max(1),
        });
    }
    if let Some(timeout) = std::env::var("BILLBEE_BATCH_ITEM_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
    {
        config = config.with_item_timeout(timeout);
    }
    config
}
