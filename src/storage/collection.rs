//! Ordered in-memory collection of one resource's records

use tracing::debug;

use crate::core::error::ResourceError;
use crate::core::query::{Filter, GetListParams, ListResult, SortOrder};
use crate::core::record::{Record, RecordId};

/// Records of one resource, in insertion order
///
/// The collection owns id assignment: every created record gets one more
/// than the highest id ever issued, so ids of deleted records are never
/// handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    last_id: RecordId,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            last_id: 0,
        }
    }

    /// Build a collection from seed records, keeping their ids
    pub(crate) fn from_records(records: Vec<T>) -> Self {
        let last_id = records.iter().map(|record| record.id()).max().unwrap_or(0);
        Self { records, last_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Filter, sort and slice the collection
    pub fn get_list(&self, params: &GetListParams) -> ListResult<T> {
        let mut matching: Vec<&T> = self
            .records
            .iter()
            .filter(|record| matches_filter(*record, &params.filter))
            .collect();

        if let Some(sort) = &params.sort {
            // sort_by is stable, so ties keep insertion order in both directions
            matching.sort_by(|a, b| {
                let ordering = match (a.field_value(&sort.field), b.field_value(&sort.field)) {
                    (Some(x), Some(y)) => x.compare(&y),
                    (x, y) => x.is_some().cmp(&y.is_some()),
                };
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let total = matching.len();
        let data = match params.pagination {
            Some(pagination) => matching
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .cloned()
                .collect(),
            None => matching.into_iter().cloned().collect(),
        };

        ListResult { data, total }
    }

    /// Get a copy of the record with this id
    pub fn get_one(&self, id: RecordId) -> Result<T, ResourceError> {
        self.position(id)
            .map(|index| self.records[index].clone())
            .ok_or_else(|| ResourceError::not_found(T::resource_name(), id))
    }

    /// Get copies of the records with these ids, in request order
    pub fn get_many(&self, ids: &[RecordId]) -> Vec<T> {
        ids.iter()
            .filter_map(|id| self.position(*id).map(|index| self.records[index].clone()))
            .collect()
    }

    /// Append a record under a freshly issued id
    pub(crate) fn create(&mut self, mut record: T) -> T {
        self.last_id += 1;
        record.set_id(self.last_id);
        self.records.push(record.clone());

        debug!(resource = T::resource_name(), id = self.last_id, "record created");
        record
    }

    /// Replace the record with this id in place, keeping the id
    pub(crate) fn update(&mut self, id: RecordId, mut record: T) -> Result<T, ResourceError> {
        let index = self
            .position(id)
            .ok_or_else(|| ResourceError::not_found(T::resource_name(), id))?;

        record.set_id(id);
        self.records[index] = record.clone();

        debug!(resource = T::resource_name(), id, "record updated");
        Ok(record)
    }

    /// Remove the record with this id and return it
    pub(crate) fn delete(&mut self, id: RecordId) -> Result<T, ResourceError> {
        let index = self
            .position(id)
            .ok_or_else(|| ResourceError::not_found(T::resource_name(), id))?;

        let removed = self.records.remove(index);

        debug!(resource = T::resource_name(), id, "record deleted");
        Ok(removed)
    }

    /// Remove every record with these ids, or none if any id is unknown
    pub(crate) fn delete_many(&mut self, ids: &[RecordId]) -> Result<Vec<RecordId>, ResourceError> {
        if let Some(missing) = ids.iter().find(|id| self.position(**id).is_none()) {
            return Err(ResourceError::not_found(T::resource_name(), *missing));
        }

        self.records.retain(|record| !ids.contains(&record.id()));

        let mut removed: Vec<RecordId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !removed.contains(id) {
                removed.push(*id);
            }
        }
        debug!(resource = T::resource_name(), count = removed.len(), "records deleted");
        Ok(removed)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter<T: Record>(record: &T, filter: &Filter) -> bool {
    filter.iter().all(|(field, expected)| {
        record
            .field_value(field)
            .is_some_and(|actual| actual.matches(expected))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Sort;
    use crate::resources::Faq;

    fn faq(question: &str) -> Faq {
        Faq {
            question: question.to_string(),
            answer: "answer".to_string(),
            ..Default::default()
        }
    }

    fn collection_of(questions: &[&str]) -> Collection<Faq> {
        let mut collection = Collection::new();
        for question in questions {
            collection.create(faq(question));
        }
        collection
    }

    fn ids(result: &ListResult<Faq>) -> Vec<RecordId> {
        result.data.iter().map(|record| record.id).collect()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let collection = collection_of(&["a", "b", "c"]);
        let all = collection.get_list(&GetListParams::new());
        assert_eq!(ids(&all), vec![1, 2, 3]);
        assert_eq!(all.total, 3);
    }

    #[test]
    fn test_create_ignores_caller_id() {
        let mut collection = collection_of(&["a"]);
        let mut record = faq("b");
        record.id = 1;

        let created = collection.create(record);
        assert_eq!(created.id, 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut collection = collection_of(&["a", "b", "c"]);
        collection.delete(3).unwrap();

        let created = collection.create(faq("d"));
        assert_eq!(created.id, 4);
    }

    #[test]
    fn test_from_records_continues_after_highest_id() {
        let mut seeded = faq("seeded");
        seeded.id = 7;
        let mut collection = Collection::from_records(vec![seeded]);

        assert_eq!(collection.create(faq("next")).id, 8);
    }

    #[test]
    fn test_filter_exact_match() {
        let collection = collection_of(&["a", "b", "a"]);
        let result = collection.get_list(&GetListParams::new().filter("question", "a"));
        assert_eq!(ids(&result), vec![1, 3]);
        assert_eq!(result.total, 2);

        let partial = collection.get_list(&GetListParams::new().filter("question", "A"));
        assert_eq!(partial.total, 0);
    }

    #[test]
    fn test_filter_on_unknown_field_matches_nothing() {
        let collection = collection_of(&["a"]);
        let result = collection.get_list(&GetListParams::new().filter("missing", "a"));
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_sort_desc_keeps_ties_in_insertion_order() {
        let collection = collection_of(&["b", "a", "b", "c", "a"]);
        let result = collection.get_list(&GetListParams::new().sort(Sort::desc("question")));
        assert_eq!(ids(&result), vec![4, 1, 3, 2, 5]);

        let result = collection.get_list(&GetListParams::new().sort(Sort::asc("question")));
        assert_eq!(ids(&result), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn test_pagination_past_end_is_empty() {
        let collection = collection_of(&["a", "b", "c"]);
        let result = collection.get_list(&GetListParams::new().paginate(3, 2));
        assert!(result.data.is_empty());
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut collection = collection_of(&["a", "b", "c"]);
        let mut replacement = faq("B");
        replacement.id = 99;

        let updated = collection.update(2, replacement).unwrap();
        assert_eq!(updated.id, 2);

        let all = collection.get_list(&GetListParams::new());
        assert_eq!(ids(&all), vec![1, 2, 3]);
        assert_eq!(all.data[1].question, "B");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut collection = collection_of(&["a"]);
        let err = collection.update(5, faq("x")).unwrap_err();
        assert!(matches!(err, ResourceError::RecordNotFound { id: 5, .. }));
        assert_eq!(collection.get_one(1).unwrap().question, "a");
    }

    #[test]
    fn test_get_many_in_request_order() {
        let collection = collection_of(&["a", "b", "c"]);
        let records = collection.get_many(&[3, 42, 1]);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_delete_many_is_all_or_nothing() {
        let mut collection = collection_of(&["a", "b", "c"]);

        let err = collection.delete_many(&[1, 9]).unwrap_err();
        assert!(matches!(err, ResourceError::RecordNotFound { id: 9, .. }));
        assert_eq!(collection.len(), 3);

        let removed = collection.delete_many(&[1, 3]).unwrap();
        assert_eq!(removed, vec![1, 3]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get_one(2).unwrap().question, "b");
    }
}
