//! Free-text search over retrieved records
//!
//! This is the list views' search box: a case-insensitive substring match
//! over each record type's searchable fields. It runs on records already
//! returned by `get_list` and is never part of the store's filtering.

use crate::core::field::FieldValue;
use crate::core::record::Record;

/// Keep the records whose searchable fields contain `term`
///
/// An empty or blank term keeps everything.
pub fn search<'a, T: Record>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches_term(*record, &needle))
        .collect()
}

/// Whether any searchable field of the record contains the lowercase `needle`
pub fn matches_term<T: Record>(record: &T, needle: &str) -> bool {
    T::searchable_fields()
        .iter()
        .filter_map(|field| record.field_value(field))
        .any(|value| contains(&value, needle))
}

fn contains(value: &FieldValue, needle: &str) -> bool {
    match value {
        FieldValue::String(s) => s.to_lowercase().contains(needle),
        FieldValue::List(items) => items.iter().any(|item| contains(item, needle)),
        _ => false,
    }
}
