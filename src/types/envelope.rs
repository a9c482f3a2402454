//! Response envelope shared by every endpoint.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Paging {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub page_size: u32,
}

impl Paging {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `{ErrorMessage, ErrorCode, Data, Paging?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_code: i32,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

pub type PagedApiResponse<T> = ApiResponse<Vec<T>>;

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Unwrap `Data`, turning a non-zero `ErrorCode` into [`Error::Api`].
    pub fn into_result(self) -> Result<Option<T>> {
        if self.error_code != 0 {
            return Err(Error::Api {
                code: self.error_code,
                message: self
                    .error_message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Billbee reported an error without a message".to_string()),
            });
        }
        Ok(self.data)
    }
}
