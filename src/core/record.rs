//! Record traits and the closed set of resource names

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ResourceError;
use crate::core::field::FieldValue;

/// Identity of a record within its collection (positive, never reused)
pub type RecordId = u64;

/// Base trait for every record type held by the store.
///
/// A record is a typed struct with a numeric `id`. Generic list operations
/// (filtering, sorting, search) reach into records through
/// [`Record::field_value`] using the field names of the JSON surface.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The resource this record type belongs to
    const RESOURCE: Resource;

    /// Get the record id
    fn id(&self) -> RecordId;

    /// Set the record id (only the store assigns ids)
    fn set_id(&mut self, id: RecordId);

    /// Get a field value by its JSON name, `None` when the field does not exist
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Fields used by free-text search
    fn searchable_fields() -> &'static [&'static str];

    /// The resource name used in the data access contract
    fn resource_name() -> &'static str {
        Self::RESOURCE.as_str()
    }
}

/// Every resource known to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Hotels,
    Yachts,
    Tours,
    Articles,
    Reviews,
    Inquiries,
    Packages,
    Faqs,
    News,
    Emails,
    Settings,
}

impl Resource {
    /// All resources, in dashboard order
    pub const ALL: [Resource; 11] = [
        Resource::Hotels,
        Resource::Yachts,
        Resource::Tours,
        Resource::Articles,
        Resource::Reviews,
        Resource::Inquiries,
        Resource::Packages,
        Resource::Faqs,
        Resource::News,
        Resource::Emails,
        Resource::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Hotels => "hotels",
            Resource::Yachts => "yachts",
            Resource::Tours => "tours",
            Resource::Articles => "articles",
            Resource::Reviews => "reviews",
            Resource::Inquiries => "inquiries",
            Resource::Packages => "packages",
            Resource::Faqs => "faqs",
            Resource::News => "news",
            Resource::Emails => "emails",
            Resource::Settings => "settings",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ResourceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str() == name)
            .ok_or_else(|| ResourceError::UnknownResource {
                resource: name.to_string(),
            })
    }
}
