use super::{envelope, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::EnumEntry;
use crate::Result;

/// `/enums` listings: the id/name pairs behind the numeric wire enums.
pub struct Enums<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Enums<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn order_states(&self) -> Result<ApiReply<Vec<EnumEntry>>> {
        envelope(self.client, RequestDescriptor::get("/enums/orderstates")).await
    }

    pub async fn payment_types(&self) -> Result<ApiReply<Vec<EnumEntry>>> {
        envelope(self.client, RequestDescriptor::get("/enums/paymenttypes")).await
    }

    pub async fn shipping_carriers(&self) -> Result<ApiReply<Vec<EnumEntry>>> {
        envelope(self.client, RequestDescriptor::get("/enums/shippingcarriers")).await
    }
}
