//! Article (product) records and stock commands.

use super::enums::{ArticleType, CustomFieldType};

dto! {
    pub struct Article {
        id: i64,
        #[serde(rename = "EAN")]
        ean: String,
        taric_number: String,
        #[serde(rename = "SKU")]
        sku: String,
        title: String,
        subtitle: String,
        description: String,
        unit: String,
        weight: f64,
        weight_net: f64,
        price: f64,
        cost_price: f64,
        vat1_rate: f64,
        vat2_rate: f64,
        vat_index: i32,
        stock_desired: f64,
        stock_current: f64,
        stock_warning: f64,
        stock_code: String,
        stock_reduce_items_per_sale: f64,
        images: Vec<ArticleImage>,
        category1: String,
        category2: String,
        category3: String,
        manufacturer: String,
        ebay_category: i64,
        #[serde(rename = "Type")]
        article_type: ArticleType,
        is_digital: bool,
        is_customizable: bool,
        delivery_time: i32,
        recipient: String,
        occasion: String,
        country_of_origin: String,
        excise_amount: f64,
        custom_fields: Vec<ArticleCustomField>,
        sources: Vec<ArticleSource>,
        tags: Vec<String>,
        sold_amount: f64,
        sold_sum_gross: f64,
        sold_sum_net: f64,
        units_per_item: f64,
        bill_of_material: Vec<BillOfMaterialItem>,
    }
}

dto! {
    pub struct ArticleImage {
        id: i64,
        article_id: i64,
        url: String,
        thumb_url: String,
        position: i32,
        is_default: bool,
        /// Base64 image payload, only sent on upload.
        image_data: String,
    }
}

dto! {
    pub struct ArticleCustomField {
        id: i64,
        name: String,
        value: String,
        #[serde(rename = "Type")]
        field_type: CustomFieldType,
    }
}

dto! {
    pub struct ArticleSource {
        id: String,
        source: String,
        source_id: String,
        api_account_id: i64,
        exported_to_source: bool,
        units_per_item: f64,
        stock_sync_inactive: bool,
        stock_sync_min: f64,
        stock_sync_max: f64,
        units_per_item_editable: bool,
        tags: Vec<String>,
    }
}

dto! {
    pub struct BillOfMaterialItem {
        id: i64,
        article_id: i64,
        amount: f64,
    }
}

dto! {
    pub struct UpdateStockModel {
        #[serde(rename = "SKU")]
        sku: String,
        stock_id: i64,
        stock: f64,
        unfulfilled_amount: f64,
        reason: String,
    }
}

impl UpdateStockModel {
    /// Set the absolute stock level for `sku`.
    pub fn absolute(sku: impl Into<String>, stock: f64) -> Self {
        Self {
            sku: Some(sku.into()),
            stock: Some(stock),
            ..Default::default()
        }
    }
}

dto! {
    pub struct UpdateStockResponse {
        message: String,
        current_stock: f64,
        unfulfilled_amount: f64,
        new_stock: f64,
        #[serde(rename = "SKU")]
        sku: String,
    }
}

dto! {
    pub struct UpdateStockCodeModel {
        #[serde(rename = "SKU")]
        sku: String,
        stock_code: String,
        stock_id: i64,
    }
}

dto! {
    pub struct UpdateStockCodeResponse {
        message: String,
        current_stock_code: String,
        new_stock_code: String,
    }
}

dto! {
    pub struct DeletedImagesModel {
        deleted_image_ids: Vec<i64>,
        not_found_image_ids: Vec<i64>,
    }
}

dto! {
    pub struct ReservedAmount {
        reserved_amount: f64,
        article: Article,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_article_serializes_only_set_fields() {
        let article = Article {
            sku: Some("SKU-1".into()),
            title: Some("Mug".into()),
            price: Some(9.5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&article).unwrap(),
            json!({"SKU": "SKU-1", "Title": "Mug", "Price": 9.5})
        );
    }

    #[test]
    fn article_decodes_wire_names() {
        let article: Article = serde_json::from_value(json!({
            "Id": 42,
            "EAN": "4000000000000",
            "Type": 1,
            "StockCurrent": 7.0,
            "Images": [{"Id": 1, "Url": "https://img", "IsDefault": true}],
            "UnknownFutureField": "ignored"
        }))
        .unwrap();
        assert_eq!(article.id, Some(42));
        assert_eq!(article.ean.as_deref(), Some("4000000000000"));
        assert_eq!(article.article_type, Some(ArticleType::Service));
        assert_eq!(article.images.unwrap()[0].is_default, Some(true));
    }

    #[test]
    fn stock_update_helper() {
        let update = UpdateStockModel::absolute("SKU-1", 12.0);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"SKU": "SKU-1", "Stock": 12.0})
        );
    }
}
