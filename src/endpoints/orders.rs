use super::query::{segment, QueryBuilder};
use super::{envelope, require_non_empty, to_body, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::{
    AddShipmentModel, Invoice, Order, OrderStateUpdate, OrderTagCreate, ParseTextContainer,
    SendMessageModel, Shipment, TriggerEventContainer,
};
use crate::Result;
use serde_json::Value;
use std::fmt;

/// Where item titles in a returned order come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleTitleSource {
    OrderPosition = 0,
    ArticleTitle = 1,
    ArticleInvoiceText = 2,
    ArticleShortText = 3,
}

impl fmt::Display for ArticleTitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Filters for `GET /orders`. Dates are ISO-8601 strings.
///
/// List filters (`shop_id`, `order_state_id`, `tag`) go out as repeated keys,
/// e.g. `tag=a&tag=b`, not as one comma-joined value.
#[derive(Debug, Clone, Default)]
pub struct OrderListOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub min_order_date: Option<String>,
    pub max_order_date: Option<String>,
    pub shop_id: Vec<i64>,
    pub order_state_id: Vec<i32>,
    pub tag: Vec<String>,
    pub minimum_billbee_order_id: Option<i64>,
    pub modified_at_min: Option<String>,
    pub modified_at_max: Option<String>,
    pub article_title_source: Option<ArticleTitleSource>,
    pub exclude_tags: Option<bool>,
}

/// Filters for `GET /orders/invoices`.
#[derive(Debug, Clone, Default)]
pub struct InvoiceListOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub min_invoice_date: Option<String>,
    pub max_invoice_date: Option<String>,
    pub shop_id: Vec<i64>,
    pub order_state_id: Vec<i32>,
    pub tag: Vec<String>,
    pub min_pay_date: Option<String>,
    pub max_pay_date: Option<String>,
    pub include_positions: Option<bool>,
    pub exclude_tags: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateInvoiceOptions {
    pub include_invoice_pdf: Option<bool>,
    pub template_id: Option<i64>,
    pub send_to_cloud_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateDeliveryNoteOptions {
    pub include_pdf: Option<bool>,
    pub send_to_cloud_id: Option<i64>,
}

/// `/orders` endpoints.
pub struct Orders<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &OrderListOptions) -> Result<ApiReply<Vec<Order>>> {
        let path = QueryBuilder::new("/orders")
            .paging(options.page, options.page_size)
            .opt("minOrderDate", options.min_order_date.as_deref())
            .opt("maxOrderDate", options.max_order_date.as_deref())
            .list("shopId", &options.shop_id)
            .list("orderStateId", &options.order_state_id)
            .list("tag", &options.tag)
            .opt("minimumBillBeeOrderId", options.minimum_billbee_order_id)
            .opt("modifiedAtMin", options.modified_at_min.as_deref())
            .opt("modifiedAtMax", options.modified_at_max.as_deref())
            .opt("articleTitleSource", options.article_title_source)
            .opt("excludeTags", options.exclude_tags)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn get(
        &self,
        id: i64,
        article_title_source: Option<ArticleTitleSource>,
    ) -> Result<ApiReply<Order>> {
        let path = QueryBuilder::new(format!("/orders/{id}"))
            .opt("articleTitleSource", article_title_source)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn create(&self, order: &Order, shop_id: Option<i64>) -> Result<ApiReply<Order>> {
        let path = QueryBuilder::new("/orders").opt("shopId", shop_id).build();
        envelope(self.client, RequestDescriptor::post(path, to_body(order)?)).await
    }

    pub async fn patch(&self, id: i64, order: &Order) -> Result<ApiReply<Order>> {
        let request = RequestDescriptor::patch(format!("/orders/{id}"), to_body(order)?);
        envelope(self.client, request).await
    }

    pub async fn patchable_fields(&self) -> Result<ApiReply<Vec<String>>> {
        envelope(self.client, RequestDescriptor::get("/orders/PatchableFields")).await
    }

    /// Look up an order by the id the sales channel (`partner`) assigned.
    pub async fn find_by_external_id(&self, id: &str, partner: &str) -> Result<ApiReply<Order>> {
        require_non_empty("id", id)?;
        require_non_empty("partner", partner)?;
        let path = QueryBuilder::new("/orders/find")
            .param("id", id)
            .param("partner", partner)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn get_by_external_ref(&self, ext_ref: &str) -> Result<ApiReply<Order>> {
        require_non_empty("ext_ref", ext_ref)?;
        let path = format!("/orders/findbyextref/{}", segment(ext_ref));
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn update_state(&self, id: i64, update: &OrderStateUpdate) -> Result<ApiReply<Value>> {
        let request = RequestDescriptor::patch(format!("/orders/{id}/orderstate"), to_body(update)?);
        envelope(self.client, request).await
    }

    pub async fn add_tags(&self, id: i64, tags: &OrderTagCreate) -> Result<ApiReply<Value>> {
        let request = RequestDescriptor::post(format!("/orders/{id}/tags"), to_body(tags)?);
        envelope(self.client, request).await
    }

    /// Replace the order's tags.
    pub async fn update_tags(&self, id: i64, tags: &OrderTagCreate) -> Result<ApiReply<Value>> {
        let request = RequestDescriptor::put(format!("/orders/{id}/tags"), to_body(tags)?);
        envelope(self.client, request).await
    }

    pub async fn add_shipment(
        &self,
        id: i64,
        shipment: &AddShipmentModel,
    ) -> Result<ApiReply<Shipment>> {
        let request = RequestDescriptor::post(format!("/orders/{id}/shipment"), to_body(shipment)?);
        envelope(self.client, request).await
    }

    pub async fn send_message(&self, id: i64, message: &SendMessageModel) -> Result<ApiReply<Value>> {
        let request =
            RequestDescriptor::post(format!("/orders/{id}/send-message"), to_body(message)?);
        envelope(self.client, request).await
    }

    /// Resolve Billbee placeholders in `text` against this order.
    pub async fn parse_placeholders(
        &self,
        id: i64,
        text: &ParseTextContainer,
    ) -> Result<ApiReply<String>> {
        let request =
            RequestDescriptor::post(format!("/orders/{id}/parse-placeholders"), to_body(text)?);
        envelope(self.client, request).await
    }

    pub async fn trigger_event(
        &self,
        id: i64,
        event: &TriggerEventContainer,
    ) -> Result<ApiReply<Value>> {
        let request =
            RequestDescriptor::post(format!("/orders/{id}/trigger-event"), to_body(event)?);
        envelope(self.client, request).await
    }

    pub async fn create_invoice(
        &self,
        id: i64,
        options: &CreateInvoiceOptions,
    ) -> Result<ApiReply<Invoice>> {
        let path = QueryBuilder::new(format!("/orders/{id}/createinvoice"))
            .opt("includeInvoicePdf", options.include_invoice_pdf)
            .opt("templateId", options.template_id)
            .opt("sendToCloudId", options.send_to_cloud_id)
            .build();
        envelope(self.client, RequestDescriptor::post(path, None)).await
    }

    pub async fn create_delivery_note(
        &self,
        id: i64,
        options: &CreateDeliveryNoteOptions,
    ) -> Result<ApiReply<Value>> {
        let path = QueryBuilder::new(format!("/orders/{id}/createdeliverynote"))
            .opt("includePdf", options.include_pdf)
            .opt("sendToCloudId", options.send_to_cloud_id)
            .build();
        envelope(self.client, RequestDescriptor::post(path, None)).await
    }

    pub async fn invoices(&self, options: &InvoiceListOptions) -> Result<ApiReply<Vec<Invoice>>> {
        let path = QueryBuilder::new("/orders/invoices")
            .paging(options.page, options.page_size)
            .opt("minInvoiceDate", options.min_invoice_date.as_deref())
            .opt("maxInvoiceDate", options.max_invoice_date.as_deref())
            .list("shopId", &options.shop_id)
            .list("orderStateId", &options.order_state_id)
            .list("tag", &options.tag)
            .opt("minPayDate", options.min_pay_date.as_deref())
            .opt("maxPayDate", options.max_pay_date.as_deref())
            .opt("includePositions", options.include_positions)
            .opt("excludeTags", options.exclude_tags)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }
}
