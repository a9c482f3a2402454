use super::query::{segment, QueryBuilder};
use super::{envelope, require_non_empty, to_body, ApiReply, PageOptions};
use crate::batch::{Reply, RequestDescriptor};
use crate::client::BillbeeClient;
use crate::types::{
    ApiResponse, Article, ArticleCustomField, ArticleImage, DeletedImagesModel, ReservedAmount,
    UpdateStockCodeModel, UpdateStockCodeResponse, UpdateStockModel, UpdateStockResponse,
};
use crate::{Error, ErrorContext, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};
use std::fmt;

/// Which identifier an article lookup uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupBy {
    #[default]
    Id,
    Sku,
    Ean,
}

impl LookupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupBy::Id => "id",
            LookupBy::Sku => "sku",
            LookupBy::Ean => "ean",
        }
    }
}

impl fmt::Display for LookupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// ISO-8601 timestamp.
    pub min_created_at: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReservedAmountOptions {
    pub lookup_by: Option<LookupBy>,
    pub stock_id: Option<i64>,
}

/// `/products` endpoints.
pub struct Articles<'a> {
    client: &'a BillbeeClient,
}

impl<'a> Articles<'a> {
    pub(crate) fn new(client: &'a BillbeeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ArticleListOptions) -> Result<ApiReply<Vec<Article>>> {
        let path = QueryBuilder::new("/products")
            .paging(options.page, options.page_size)
            .opt("minCreatedAt", options.min_created_at.as_deref())
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    /// Fetch one article by id, SKU or EAN. `lookupBy` is only sent for
    /// non-id lookups.
    pub async fn get(&self, id: impl fmt::Display, lookup_by: LookupBy) -> Result<ApiReply<Article>> {
        let lookup = (lookup_by != LookupBy::Id).then_some(lookup_by);
        let path = QueryBuilder::new(format!("/products/{}", segment(id)))
            .opt("lookupBy", lookup)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn create(&self, article: &Article) -> Result<ApiReply<Article>> {
        let request = RequestDescriptor::post("/products", to_body(article)?);
        envelope(self.client, request).await
    }

    pub async fn patch(&self, id: i64, article: &Article) -> Result<ApiReply<Article>> {
        let request = RequestDescriptor::patch(format!("/products/{id}"), to_body(article)?);
        envelope(self.client, request).await
    }

    pub async fn delete(&self, id: i64) -> Result<ApiReply<Value>> {
        envelope(self.client, RequestDescriptor::delete(format!("/products/{id}"))).await
    }

    pub async fn patchable_fields(&self) -> Result<ApiReply<Vec<String>>> {
        envelope(self.client, RequestDescriptor::get("/products/PatchableFields")).await
    }

    pub async fn categories(&self) -> Result<ApiReply<Vec<Value>>> {
        envelope(self.client, RequestDescriptor::get("/products/category")).await
    }

    pub async fn custom_fields(
        &self,
        paging: PageOptions,
    ) -> Result<ApiReply<Vec<ArticleCustomField>>> {
        let path = QueryBuilder::new("/products/custom-fields")
            .paging(paging.page, paging.page_size)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn custom_field(&self, id: i64) -> Result<ApiReply<ArticleCustomField>> {
        let path = format!("/products/custom-fields/{id}");
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn images(&self, article_id: i64) -> Result<ApiReply<Vec<ArticleImage>>> {
        let path = format!("/products/{article_id}/images");
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn image(&self, image_id: i64) -> Result<ApiReply<ArticleImage>> {
        let path = format!("/products/images/{image_id}");
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn delete_image(&self, image_id: i64) -> Result<ApiReply<Value>> {
        let path = format!("/products/images/{image_id}");
        envelope(self.client, RequestDescriptor::delete(path)).await
    }

    pub async fn delete_images(&self, image_ids: &[i64]) -> Result<ApiReply<DeletedImagesModel>> {
        if image_ids.is_empty() {
            return Err(Error::validation_with_context(
                "at least one image id is required",
                ErrorContext::new()
                    .with_field_path("image_ids")
                    .with_source("articles"),
            ));
        }
        let body = json!({ "imageIds": image_ids });
        let request = RequestDescriptor::post("/products/images/delete", Some(body));
        envelope(self.client, request).await
    }

    pub async fn reserved_amount(
        &self,
        id: impl fmt::Display,
        options: &ReservedAmountOptions,
    ) -> Result<ApiReply<ReservedAmount>> {
        let path = QueryBuilder::new(format!("/products/reservedamount/{}", segment(id)))
            .opt("lookupBy", options.lookup_by)
            .opt("stockId", options.stock_id)
            .build();
        envelope(self.client, RequestDescriptor::get(path)).await
    }

    pub async fn update_stock(
        &self,
        update: &UpdateStockModel,
    ) -> Result<ApiReply<UpdateStockResponse>> {
        let request = RequestDescriptor::post("/products/updatestock", to_body(update)?);
        envelope(self.client, request).await
    }

    /// The response is a list of envelopes, one per update, not a single one.
    pub async fn update_stock_multiple(
        &self,
        updates: &[UpdateStockModel],
    ) -> Result<Reply<Vec<ApiResponse<UpdateStockResponse>>>> {
        if updates.is_empty() {
            return Err(Error::validation_with_context(
                "at least one stock update is required",
                ErrorContext::new()
                    .with_field_path("updates")
                    .with_source("articles"),
            ));
        }
        let request = RequestDescriptor::post("/products/updatestockmultiple", to_body(&updates)?);
        self.client.request(request).await
    }

    pub async fn update_stock_code(
        &self,
        update: &UpdateStockCodeModel,
    ) -> Result<ApiReply<UpdateStockCodeResponse>> {
        let request = RequestDescriptor::post("/products/updatestockcode", to_body(update)?);
        envelope(self.client, request).await
    }

    /// Upload raw image bytes; they are sent base64-encoded.
    pub async fn upload_image(
        &self,
        article_id: i64,
        image: &[u8],
        position: Option<i32>,
        is_default: Option<bool>,
    ) -> Result<ApiReply<ArticleImage>> {
        if image.is_empty() {
            return Err(Error::validation_with_context(
                "image data is empty",
                ErrorContext::new()
                    .with_field_path("image")
                    .with_source("articles"),
            ));
        }
        self.upload_image_base64(article_id, &BASE64.encode(image), position, is_default)
            .await
    }

    /// Upload an image that is already base64-encoded.
    pub async fn upload_image_base64(
        &self,
        article_id: i64,
        image_data: &str,
        position: Option<i32>,
        is_default: Option<bool>,
    ) -> Result<ApiReply<ArticleImage>> {
        require_non_empty("image_data", image_data)?;
        let body = ArticleImage {
            article_id: Some(article_id),
            image_data: Some(image_data.to_string()),
            position,
            is_default,
            ..Default::default()
        };
        let request =
            RequestDescriptor::post(format!("/products/{article_id}/images"), to_body(&body)?);
        envelope(self.client, request).await
    }

    pub async fn update_image(
        &self,
        image_id: i64,
        image: &ArticleImage,
    ) -> Result<ApiReply<ArticleImage>> {
        let request =
            RequestDescriptor::patch(format!("/products/images/{image_id}"), to_body(image)?);
        envelope(self.client, request).await
    }
}
