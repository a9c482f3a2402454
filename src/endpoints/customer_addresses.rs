use super::query::QueryBuilder;
use super::{envelope, to_body, ApiReply, PageOptions};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::Address;
use crate::Result;

/// `/customer-addresses` endpoints.
pub struct CustomerAddresses<'a> {
    client: &'a BillbeeClient,
}

impl<'a> CustomerAddresses<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, paging: PageOptions) -> Result<ApiReply<Vec<Address>>> {
        let path = QueryBuilder::new("/customer-addresses")
            .paging(paging.page, paging.page_size)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn get(&self, id: i64) -> Result<ApiReply<Address>> {
        let path = format!("/customer-addresses/{id}");
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn create(&self, address: &Address) -> Result<ApiReply<Address>> {
        let request = RequestDescriptor::post("/customer-addresses", to_body(address)?);
        envelope(self.client, request).await
    }

    /// Full replace (`PUT`); unset fields are cleared on the server.
    pub async fn update(&self, id: i64, address: &Address) -> Result<ApiReply<Address>> {
        let request =
            RequestDescriptor::put(format!("/customer-addresses/{id}"), to_body(address)?);
        envelope(self.client, request).await
    }

    /// Partial update (`PATCH`); only the set fields are sent.
    pub async fn patch(&self, id: i64, address: &Address) -> Result<ApiReply<Address>> {
        let request =
            RequestDescriptor::patch(format!("/customer-addresses/{id}"), to_body(address)?);
        envelope(self.client, request).await
    }
}
