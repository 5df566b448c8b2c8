//! The resource store: owner of every collection

use serde_json::Value;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::core::error::{AdminError, AdminResult, ResourceError};
use crate::core::provider::{
    CreateParams, DataProvider, DeleteManyParams, DeleteManyResult, DeleteParams, GetManyParams,
    GetOneParams, RecordResult, UpdateParams,
};
use crate::core::query::{GetListParams, ListResult};
use crate::core::record::{Record, RecordId, Resource};
use crate::resources::{
    Article, Email, Faq, Hotel, Inquiry, News, Package, Review, Settings, Tour, Yacht,
};
use crate::storage::collection::Collection;
use crate::storage::seed::Seeder;

/// In-memory owner of all resource collections
///
/// Built once at startup and handed by reference to whatever drives it.
/// Reads take `&self` and mutations `&mut self`, so operations are applied
/// one at a time without locking. Callers only ever receive copies.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    hotels: Collection<Hotel>,
    yachts: Collection<Yacht>,
    tours: Collection<Tour>,
    articles: Collection<Article>,
    reviews: Collection<Review>,
    inquiries: Collection<Inquiry>,
    packages: Collection<Package>,
    faqs: Collection<Faq>,
    news: Collection<News>,
    emails: Collection<Email>,
    settings: Collection<Settings>,
}

/// Record types that live in the store
///
/// Sealed: only the store itself can reach a collection mutably.
pub trait Stored: Record + access::CollectionAccess {}

mod access {
    use super::{Collection, ResourceStore};

    pub trait CollectionAccess: Sized + crate::core::record::Record {
        fn collection(store: &ResourceStore) -> &Collection<Self>;

        fn collection_mut(store: &mut ResourceStore) -> &mut Collection<Self>;
    }
}

use access::CollectionAccess;

macro_rules! impl_stored {
    ($( $type:ty => $field:ident ),* $(,)?) => {
        $(
            impl CollectionAccess for $type {
                fn collection(store: &ResourceStore) -> &Collection<Self> {
                    &store.$field
                }

                fn collection_mut(store: &mut ResourceStore) -> &mut Collection<Self> {
                    &mut store.$field
                }
            }

            impl Stored for $type {}
        )*
    };
}

impl_stored!(
    Hotel => hotels,
    Yacht => yachts,
    Tour => tours,
    Article => articles,
    Review => reviews,
    Inquiry => inquiries,
    Package => packages,
    Faq => faqs,
    News => news,
    Email => emails,
    Settings => settings,
);

/// Run `$body` with `$record` bound to the record type of `$resource`
macro_rules! with_record_type {
    ($resource:expr, $record:ident => $body:expr) => {
        match $resource {
            Resource::Hotels => { type $record = Hotel; $body }
            Resource::Yachts => { type $record = Yacht; $body }
            Resource::Tours => { type $record = Tour; $body }
            Resource::Articles => { type $record = Article; $body }
            Resource::Reviews => { type $record = Review; $body }
            Resource::Inquiries => { type $record = Inquiry; $body }
            Resource::Packages => { type $record = Package; $body }
            Resource::Faqs => { type $record = Faq; $body }
            Resource::News => { type $record = News; $body }
            Resource::Emails => { type $record = Email; $body }
            Resource::Settings => { type $record = Settings; $body }
        }
    };
}

impl ResourceStore {
    /// Create a store with empty collections
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store seeded from configuration
    pub fn seeded(config: &StoreConfig) -> Self {
        let mut seeder = Seeder::new(config.seed);
        let store = Self::from_seeder(&mut seeder, config);
        for resource in Resource::ALL {
            info!(resource = resource.as_str(), count = store.count(resource), "collection seeded");
        }
        store
    }

    /// Create a store seeded by a caller-provided generator
    pub fn from_seeder(seeder: &mut Seeder, config: &StoreConfig) -> Self {
        let counts = &config.counts;
        Self {
            hotels: Collection::from_records(seeder.hotels(counts.hotels)),
            yachts: Collection::from_records(seeder.yachts(counts.yachts)),
            tours: Collection::from_records(seeder.tours(counts.tours)),
            articles: Collection::from_records(seeder.articles(counts.articles)),
            reviews: Collection::from_records(seeder.reviews(counts.reviews)),
            inquiries: Collection::from_records(seeder.inquiries(counts.inquiries)),
            packages: Collection::from_records(seeder.packages(counts.packages)),
            faqs: Collection::from_records(seeder.faqs(counts.faqs)),
            news: Collection::from_records(seeder.news(counts.news)),
            emails: Collection::from_records(seeder.emails(counts.emails)),
            settings: Collection::from_records(seeder.settings(&config.settings)),
        }
    }

    /// Number of records currently held for a resource
    pub fn count(&self, resource: Resource) -> usize {
        with_record_type!(resource, R => R::collection(self).len())
    }

    /// Read-only typed view of a collection
    pub fn records<T: Stored>(&self) -> &Collection<T> {
        T::collection(self)
    }

    /// Create a typed record, returning it with its assigned id
    pub fn insert<T: Stored>(&mut self, record: T) -> T {
        T::collection_mut(self).create(record)
    }

    /// Replace a typed record, keeping its id and position
    pub fn replace<T: Stored>(&mut self, id: RecordId, record: T) -> AdminResult<T> {
        T::collection_mut(self)
            .update(id, record)
            .map_err(log_failure)
    }

    /// Remove a typed record and return it
    pub fn remove<T: Stored>(&mut self, id: RecordId) -> AdminResult<T> {
        T::collection_mut(self).delete(id).map_err(log_failure)
    }
}

fn resolve(resource: &str) -> AdminResult<Resource> {
    resource.parse::<Resource>().map_err(log_failure)
}

fn log_failure(err: ResourceError) -> AdminError {
    if err.is_not_found() {
        warn!(error = %err, "lookup failed");
    }
    err.into()
}

fn to_json<T: Record>(record: &T) -> AdminResult<Value> {
    Ok(serde_json::to_value(record)?)
}

fn from_json<T: Record>(data: Value) -> AdminResult<T> {
    serde_json::from_value(data).map_err(|err| {
        ResourceError::InvalidRecord {
            resource: T::resource_name().to_string(),
            message: err.to_string(),
        }
        .into()
    })
}

impl DataProvider for ResourceStore {
    fn get_list(&self, resource: &str, params: &GetListParams) -> AdminResult<ListResult<Value>> {
        with_record_type!(resolve(resource)?, R => {
            let page = R::collection(self).get_list(params);
            let data = page.data.iter().map(to_json).collect::<AdminResult<Vec<_>>>()?;
            Ok(ListResult { data, total: page.total })
        })
    }

    fn get_one(&self, resource: &str, params: GetOneParams) -> AdminResult<RecordResult> {
        with_record_type!(resolve(resource)?, R => {
            let record = R::collection(self).get_one(params.id).map_err(log_failure)?;
            Ok(RecordResult { data: to_json(&record)? })
        })
    }

    fn get_many(&self, resource: &str, params: &GetManyParams) -> AdminResult<Vec<Value>> {
        with_record_type!(resolve(resource)?, R => {
            R::collection(self).get_many(&params.ids).iter().map(to_json).collect()
        })
    }

    fn create(&mut self, resource: &str, params: CreateParams) -> AdminResult<RecordResult> {
        with_record_type!(resolve(resource)?, R => {
            let record: R = from_json(params.data)?;
            let created = self.insert(record);
            Ok(RecordResult { data: to_json(&created)? })
        })
    }

    fn update(&mut self, resource: &str, params: UpdateParams) -> AdminResult<RecordResult> {
        with_record_type!(resolve(resource)?, R => {
            let record: R = from_json(params.data)?;
            let updated = self.replace(params.id, record)?;
            Ok(RecordResult { data: to_json(&updated)? })
        })
    }

    fn delete(&mut self, resource: &str, params: DeleteParams) -> AdminResult<RecordResult> {
        with_record_type!(resolve(resource)?, R => {
            let removed: R = self.remove(params.id)?;
            Ok(RecordResult { data: to_json(&removed)? })
        })
    }

    fn delete_many(
        &mut self,
        resource: &str,
        params: &DeleteManyParams,
    ) -> AdminResult<DeleteManyResult> {
        with_record_type!(resolve(resource)?, R => {
            let removed = R::collection_mut(self)
                .delete_many(&params.ids)
                .map_err(log_failure)?;
            Ok(DeleteManyResult { data: removed })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> ResourceStore {
        ResourceStore::seeded(&StoreConfig::seeded(1))
    }

    #[test]
    fn test_seeded_counts() {
        let store = store();
        assert_eq!(store.count(Resource::Hotels), 15);
        assert_eq!(store.count(Resource::Yachts), 10);
        assert_eq!(store.count(Resource::Tours), 20);
        assert_eq!(store.count(Resource::Reviews), 30);
        assert_eq!(store.count(Resource::Settings), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = ResourceStore::empty();
        assert!(Resource::ALL.iter().all(|resource| store.count(*resource) == 0));
    }

    #[test]
    fn test_typed_and_json_paths_share_collection() {
        let mut store = store();
        let created = store.insert(Faq {
            question: "Typed?".to_string(),
            answer: "Yes".to_string(),
            ..Default::default()
        });
        assert_eq!(created.id, 16);

        let fetched = store.get_one("faqs", GetOneParams { id: 16 }).unwrap();
        assert_eq!(fetched.data["question"], json!("Typed?"));
    }

    #[test]
    fn test_create_rejects_wrong_json_types() {
        let mut store = store();
        let err = store
            .create("hotels", CreateParams::new(json!({ "pricePerNight": "cheap" })))
            .unwrap_err();

        assert!(matches!(err, AdminError::Resource(ResourceError::InvalidRecord { .. })));
        assert_eq!(store.count(Resource::Hotels), 15);
    }

    #[test]
    fn test_unknown_resource_is_not_found() {
        let mut store = store();
        let err = store.get_list("castles", &GetListParams::new()).unwrap_err();
        assert!(err.is_not_found());

        let err = store.create("castles", CreateParams::new(json!({}))).unwrap_err();
        assert!(err.is_not_found());
    }
}
