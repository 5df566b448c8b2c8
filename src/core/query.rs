//! List query parameters: filtering, sorting and pagination

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::field::FieldValue;

/// Exact-match filter: every entry must match the record's field value
pub type Filter = IndexMap<String, FieldValue>;

/// Page window of a list query
///
/// Pages start at 1. A page of 0 is read as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Index of the first item of the window
    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.per_page)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort field and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Parameters of a list query
///
/// Absent pagination returns the whole filtered sequence, absent sort keeps
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetListParams {
    pub pagination: Option<Pagination>,
    pub sort: Option<Sort>,
    pub filter: Filter,
}

impl GetListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }
}

/// Result of a list query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult<T> {
    /// The requested page
    pub data: Vec<T>,

    /// Number of records matching the filter, before pagination
    pub total: usize,
}
