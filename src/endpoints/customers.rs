use super::query::QueryBuilder;
use super::{envelope, to_body, ApiReply, PageOptions};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::{Address, Customer, Order};
use crate::Result;

/// `/customers` endpoints.
pub struct Customers<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, paging: PageOptions) -> Result<ApiReply<Vec<Customer>>> {
        let path = QueryBuilder::new("/customers")
            .paging(paging.page, paging.page_size)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn get(&self, id: i64) -> Result<ApiReply<Customer>> {
        envelope(self.client, RequestDescriptor::get(format!("/customers/{id}"))).await
    }

    pub async fn create(&self, customer: &Customer) -> Result<ApiReply<Customer>> {
        let request = RequestDescriptor::post("/customers", to_body(customer)?);
        envelope(self.client, request).await
    }

    /// Full replace (`PUT`).
    pub async fn update(&self, id: i64, customer: &Customer) -> Result<ApiReply<Customer>> {
        let request = RequestDescriptor::put(format!("/customers/{id}"), to_body(customer)?);
        envelope(self.client, request).await
    }

    pub async fn addresses(&self, id: i64, paging: PageOptions) -> Result<ApiReply<Vec<Address>>> {
        let path = QueryBuilder::new(format!("/customers/{id}/addresses"))
            .paging(paging.page, paging.page_size)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn add_address(&self, id: i64, address: &Address) -> Result<ApiReply<Address>> {
        let request =
            RequestDescriptor::post(format!("/customers/{id}/addresses"), to_body(address)?);
        envelope(self.client, request).await
    }

    pub async fn orders(&self, id: i64, paging: PageOptions) -> Result<ApiReply<Vec<Order>>> {
        let path = QueryBuilder::new(format!("/customers/{id}/orders"))
            .paging(paging.page, paging.page_size)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }
}
