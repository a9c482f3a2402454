use super::{envelope, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::CloudStorage;
use crate::Result;

pub struct CloudStorages<'a> {
    client: &'a BillbeeClient,
}

impl<'a> CloudStorages<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ApiReply<Vec<CloudStorage>>> {
        envelope(self.client, RequestDescriptor::get("/cloudstorages")).await
    }
}
