//! # travel-admin
//!
//! Data layer of a travel-booking administration dashboard: an in-memory
//! store of hotels, yachts, tours, articles, reviews, inquiries, packages,
//! FAQs, news, emails and site settings, reached through a single
//! resource-name-parameterized data access contract.
//!
//! ## Features
//!
//! - **Typed records**: one struct per resource, with the dashboard's JSON field names
//! - **Data Provider**: `get_list`, `get_one`, `get_many`, `get_many_reference`,
//!   `create`, `update`, `delete`, `delete_many`
//! - **Exact filters, stable sorting, page slicing** on every list
//! - **Monotonic ids**: ids of deleted records are never reissued
//! - **Seeded fixtures**: randomized but shape-stable initial data, reproducible with a seed
//! - **Form helpers**: free-text search, field validation, dashboard figures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use travel_admin::prelude::*;
//!
//! let mut store = ResourceStore::seeded(&StoreConfig::default());
//!
//! let page = store.get_list(
//!     "hotels",
//!     &GetListParams::new()
//!         .paginate(1, 25)
//!         .sort(Sort::asc("id"))
//!         .filter("location", "Luxor"),
//! )?;
//!
//! let created = store.create("tours", CreateParams::new(json!({
//!     "title": "Sunrise balloon ride",
//!     "duration": "Half-day",
//!     "price": 120.0
//! })))?;
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Contract ===
    pub use crate::core::provider::{
        CreateParams, DataProvider, DeleteManyParams, DeleteManyResult, DeleteParams,
        GetManyParams, GetManyReferenceParams, GetOneParams, RecordResult, UpdateParams,
    };
    pub use crate::core::query::{
        Filter, GetListParams, ListResult, Pagination, Sort, SortOrder,
    };

    // === Records ===
    pub use crate::core::field::FieldValue;
    pub use crate::core::record::{Record, RecordId, Resource};
    pub use crate::resources::{
        Article, Email, Faq, Hotel, Inquiry, InquiryStatus, News, Package, Review, Settings,
        Tour, Yacht,
    };

    // === Errors ===
    pub use crate::core::error::{
        AdminError, AdminResult, ConfigError, ErrorResponse, FieldValidationError,
        ResourceError, ValidationError,
    };

    // === Helpers ===
    pub use crate::core::dashboard::DashboardSummary;
    pub use crate::core::search::search;
    pub use crate::core::validation::{FieldChecks, Validate};

    // === Storage ===
    pub use crate::storage::{Collection, ResourceStore, Seeder, Stored};

    // === Config ===
    pub use crate::config::{SeedCounts, SiteSettings, StoreConfig};

    // === External dependencies ===
    pub use serde_json::{Value, json};
}
