//! The data access contract
//!
//! [`DataProvider`] is the only way callers read or change stored records.
//! Every operation names its resource, works on JSON records, and is applied
//! fully or not at all.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::AdminResult;
use crate::core::query::{Filter, GetListParams, ListResult, Pagination, Sort};
use crate::core::record::RecordId;

/// Parameters of `get_one`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GetOneParams {
    pub id: RecordId,
}

/// Parameters of `get_many`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GetManyParams {
    pub ids: Vec<RecordId>,
}

/// Parameters of `get_many_reference`
///
/// Lists the records whose `target` field equals `id`, e.g. the reviews
/// whose `relatedId` is 3.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetManyReferenceParams {
    pub target: String,
    pub id: RecordId,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub sort: Option<Sort>,
    #[serde(default)]
    pub filter: Filter,
}

impl GetManyReferenceParams {
    pub fn new(target: impl Into<String>, id: RecordId) -> Self {
        Self {
            target: target.into(),
            id,
            pagination: None,
            sort: None,
            filter: Filter::new(),
        }
    }

    /// The equivalent list query
    pub fn into_list_params(self) -> GetListParams {
        let mut filter = self.filter;
        filter.insert(self.target, self.id.into());
        GetListParams {
            pagination: self.pagination,
            sort: self.sort,
            filter,
        }
    }
}

/// Parameters of `create`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateParams {
    pub data: Value,
}

impl CreateParams {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

/// Parameters of `update`
///
/// `previous_data` is what the caller last read. It is accepted for callers
/// doing their own conflict bookkeeping and is not compared: last write wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParams {
    pub id: RecordId,
    pub data: Value,
    #[serde(default)]
    pub previous_data: Option<Value>,
}

impl UpdateParams {
    pub fn new(id: RecordId, data: Value) -> Self {
        Self {
            id,
            data,
            previous_data: None,
        }
    }

    pub fn with_previous(mut self, previous: Value) -> Self {
        self.previous_data = Some(previous);
        self
    }
}

/// Parameters of `delete`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub id: RecordId,
    #[serde(default)]
    pub previous_data: Option<Value>,
}

impl DeleteParams {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            previous_data: None,
        }
    }
}

/// Parameters of `delete_many`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DeleteManyParams {
    pub ids: Vec<RecordId>,
}

/// Single-record result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordResult<T = Value> {
    pub data: T,
}

/// Result of `delete_many`: the ids that were removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteManyResult {
    pub data: Vec<RecordId>,
}

/// Resource-name-parameterized access to the store
///
/// Implementations decide how records are kept; callers only ever see copies.
pub trait DataProvider {
    /// List records, filtered, sorted and sliced to one page
    fn get_list(&self, resource: &str, params: &GetListParams) -> AdminResult<ListResult<Value>>;

    /// Get a single record by id
    fn get_one(&self, resource: &str, params: GetOneParams) -> AdminResult<RecordResult>;

    /// Get the records with the given ids, in the order requested
    ///
    /// Unknown ids are skipped.
    fn get_many(&self, resource: &str, params: &GetManyParams) -> AdminResult<Vec<Value>>;

    /// List the records referencing another record
    fn get_many_reference(
        &self,
        resource: &str,
        params: GetManyReferenceParams,
    ) -> AdminResult<ListResult<Value>> {
        self.get_list(resource, &params.into_list_params())
    }

    /// Create a record and assign it a fresh id
    fn create(&mut self, resource: &str, params: CreateParams) -> AdminResult<RecordResult>;

    /// Replace a record, keeping its id and position
    fn update(&mut self, resource: &str, params: UpdateParams) -> AdminResult<RecordResult>;

    /// Remove a record and return it
    fn delete(&mut self, resource: &str, params: DeleteParams) -> AdminResult<RecordResult>;

    /// Remove several records, all or none
    fn delete_many(
        &mut self,
        resource: &str,
        params: &DeleteManyParams,
    ) -> AdminResult<DeleteManyResult>;
}
