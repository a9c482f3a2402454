use super::{envelope, require_non_empty, to_body, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::{CreateAccountModel, TermsInfo};
use crate::Result;
use serde_json::Value;

/// `/automaticprovisioning` endpoints for creating Billbee accounts.
pub struct Provisioning<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Provisioning<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn create_account(&self, account: &CreateAccountModel) -> Result<ApiReply<Value>> {
        require_non_empty("email", account.email.as_deref().unwrap_or_default())?;
        let request =
            RequestDescriptor::post("/automaticprovisioning/CreateAccount", to_body(account)?);
        envelope(self.client, request).await
    }

    pub async fn terms_info(&self) -> Result<ApiReply<TermsInfo>> {
        envelope(
            self.client,
            RequestDescriptor::get("/automaticprovisioning/TermsInfo"),
        )
        .await
    }
}
