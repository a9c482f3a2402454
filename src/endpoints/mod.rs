//! Resource facades.
//!
//! Each facade is a thin borrowed view over a [`BillbeeClient`]: it resolves
//! the resource path, serializes the payload and routes the call through the
//! client, so immediate and queued mode apply uniformly. In queued mode every
//! method returns [`Reply::Queued`] and the typed envelope is only available
//! through [`crate::BatchOutcome::decode`] after the drain.
//!
//! | Facade | Accessor | Paths |
//! |--------|----------|-------|
//! | [`Articles`] | `articles()` / `products()` | `/products/...` |
//! | [`Orders`] | `orders()` | `/orders/...` |
//! | [`Customers`] | `customers()` | `/customers/...` |
//! | [`CustomerAddresses`] | `customer_addresses()` | `/customer-addresses/...` |
//! | [`Events`] | `events()` | `/events` |
//! | [`Enums`] | `enums()` | `/enums/...` |
//! | [`CloudStorages`] | `cloud_storages()` | `/cloudstorages` |
//! | [`Layouts`] | `layouts()` | `/layouts` |
//! | [`Provisioning`] | `provisioning()` | `/automaticprovisioning/...` |

mod articles;
mod cloud_storage;
mod customer_addresses;
mod customers;
mod enums;
mod events;
mod layouts;
mod orders;
mod provisioning;
pub(crate) mod query;

pub use articles::{ArticleListOptions, Articles, LookupBy, ReservedAmountOptions};
pub use cloud_storage::CloudStorages;
pub use customer_addresses::CustomerAddresses;
pub use customers::Customers;
pub use enums::Enums;
pub use events::{EventListOptions, Events};
pub use layouts::Layouts;
pub use orders::{
    ArticleTitleSource, CreateDeliveryNoteOptions, CreateInvoiceOptions, InvoiceListOptions,
    OrderListOptions, Orders,
};
pub use provisioning::Provisioning;
pub use query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

use crate::batch::{Reply, RequestDescriptor};
use crate::client::BillbeeClient;
use crate::types::ApiResponse;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// What every facade method hands back: the decoded envelope, or a queue slot.
pub type ApiReply<T> = Reply<ApiResponse<T>>;

/// Page selection shared by the plain list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageOptions {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Send through the client and decode the `{ErrorCode, Data, ...}` envelope.
///
/// An empty body (e.g. a bare `200` on delete) decodes as an empty envelope.
pub(crate) async fn envelope<T: DeserializeOwned>(
    client: &BillbeeClient,
    request: RequestDescriptor,
) -> Result<ApiReply<T>> {
    client
        .send(request)
        .await?
        .try_map(decode_envelope)
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<ApiResponse<T>> {
    let body = match body {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(body)?)
}

pub(crate) fn to_body(payload: &impl Serialize) -> Result<Option<Value>> {
    Ok(Some(serde_json::to_value(payload)?))
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_with_context(
            format!("{field} must not be empty"),
            ErrorContext::new().with_field_path(field),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_body_is_an_empty_envelope() {
        let resp: ApiResponse<Value> = decode_envelope(Value::Null).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.data, None);
    }

    #[test]
    fn non_envelope_body_is_a_serialization_error() {
        let err = decode_envelope::<Value>(json!("plain text")).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn empty_argument_is_rejected() {
        let err = require_non_empty("partner", "  ").unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("partner")
        );
    }
}
