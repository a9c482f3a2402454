use super::query::QueryBuilder;
use super::{envelope, ApiReply};
use crate::batch::RequestDescriptor;
use crate::client::BillbeeClient;
use crate::types::{Event, EventType};
use crate::Result;

/// Filters for `GET /events`. `type_id` is sent as repeated `typeId` keys.
#[derive(Debug, Clone, Default)]
pub struct EventListOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub type_id: Vec<EventType>,
    pub order_id: Option<i64>,
}

/// `GET /events`.
pub struct Events<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &EventListOptions) -> Result<ApiReply<Vec<Event>>> {
        let type_ids: Vec<i32> = options.type_id.iter().map(|t| i32::from(*t)).collect();
        let path = QueryBuilder::new("/events")
            .paging(options.page, options.page_size)
            .opt("minDate", options.min_date.as_deref())
            .opt("maxDate", options.max_date.as_deref())
            .list("typeId", &type_ids)
            .opt("orderId", options.order_id)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }
}
