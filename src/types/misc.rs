//! Smaller records: events, storages, layouts, enum listings, provisioning.

use super::enums::{CloudStorageType, EventType, LayoutTemplateType};

dto! {
    pub struct Event {
        id: i64,
        date: String,
        type_id: EventType,
        type_name: String,
        text: String,
        order_id: i64,
        order_number: String,
        article_id: i64,
        #[serde(rename = "ArticleSKU")]
        article_sku: String,
        employee_id: i64,
        employee_name: String,
    }
}

dto! {
    pub struct CloudStorage {
        id: i64,
        name: String,
        #[serde(rename = "Type")]
        storage_type: CloudStorageType,
        used_bytes: u64,
        max_bytes: u64,
        is_active: bool,
    }
}

dto! {
    pub struct LayoutTemplate {
        id: i64,
        name: String,
        template_text: String,
        is_default: bool,
        #[serde(rename = "Type")]
        template_type: LayoutTemplateType,
    }
}

dto! {
    /// One row of an `enums/*` listing.
    pub struct EnumEntry {
        id: i32,
        name: String,
        description: String,
    }
}

dto! {
    pub struct CreateAccountModel {
        #[serde(rename = "EMail")]
        email: String,
        accept_terms: bool,
        affiliate_coupon_code: String,
    }
}

dto! {
    pub struct TermsInfo {
        terms_url: String,
        privacy_policy_url: String,
        last_updated: String,
    }
}
