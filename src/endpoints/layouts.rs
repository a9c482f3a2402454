use super::{envelope, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::LayoutTemplate;
use crate::Result;

pub struct Layouts<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Layouts<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ApiReply<Vec<LayoutTemplate>>> {
        envelope(self.client, RequestDescriptor::get("/layouts")).await
    }
}
