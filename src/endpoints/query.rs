//! Query-string assembly for facade paths.

use std::fmt::Display;
use url::form_urlencoded;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 250;

/// Appends `key=value` pairs to a path. Unset options are skipped; list
/// options become repeated keys (`tag=a&tag=b`).
pub(crate) struct QueryBuilder {
    path: String,
    query: form_urlencoded::Serializer<'static, String>,
    empty: bool,
}

impl QueryBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: form_urlencoded::Serializer::new(String::new()),
            empty: true,
        }
    }

    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.query.append_pair(key, &value.to_string());
        self.empty = false;
        self
    }

    pub fn opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn list<V: Display>(mut self, key: &str, values: &[V]) -> Self {
        for v in values {
            self = self.param(key, v);
        }
        self
    }

    /// `page` and `pageSize` with defaults applied and the size capped.
    pub fn paging(self, page: Option<u32>, page_size: Option<u32>) -> Self {
        self.param("page", page_or_default(page))
            .param("pageSize", page_size_or_default(page_size))
    }

    pub fn build(mut self) -> String {
        if self.empty {
            return self.path;
        }
        let query = self.query.finish();
        format!("{}?{}", self.path, query)
    }
}

pub(crate) fn page_or_default(page: Option<u32>) -> u32 {
    match page {
        Some(p) if p > 0 => p,
        _ => DEFAULT_PAGE,
    }
}

pub(crate) fn page_size_or_default(page_size: Option<u32>) -> u32 {
    match page_size {
        Some(s) if s > 0 => s.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Escapes one path segment supplied by the caller (SKUs, external refs).
pub(crate) fn segment(value: impl Display) -> String {
    form_urlencoded::byte_serialize(value.to_string().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
