pub mod dashboard;
pub mod error;
pub mod field;
pub mod provider;
pub mod query;
pub mod record;
pub mod search;
pub mod validation;

pub use error::{AdminError, AdminResult};
pub use field::FieldValue;
pub use provider::DataProvider;
pub use query::{GetListParams, ListResult, Pagination, Sort, SortOrder};
pub use record::{Record, RecordId, Resource};
