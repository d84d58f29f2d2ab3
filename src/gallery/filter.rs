//! The filter/sort engine: derives the visible subset and ordering from the
//! full record set plus the current criteria. Pure functions, no state.

use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::record::Record;

/// Compute the visible set: records whose name contains `query`
/// (case-insensitive, empty query matches all) and whose uppercased first
/// character equals `letter` when one is selected, sorted ascending by name
/// with accents folded.
pub fn visible_records<'a>(
    records: &'a [Record],
    query: &str,
    letter: Option<char>,
) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    let mut visible: Vec<&Record> = records
        .iter()
        .filter(|record| matches_query(record, &needle) && matches_letter(record, letter))
        .collect();
    // Tiebreak on the raw name so equal collation keys still order
    // deterministically; the sort itself is stable.
    visible.sort_by_cached_key(|record| (collation_key(&record.name), record.name.clone()));
    visible
}

/// Distinct uppercase first letters across all loaded records, ascending.
pub fn derive_alphabet(records: &[Record]) -> Vec<char> {
    records
        .iter()
        .filter_map(Record::initial)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// Accent-insensitive lowercase key, standing in for locale-aware comparison:
/// "Pérez" and "Perez" sort together the way `localeCompare` orders them.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn matches_query(record: &Record, needle_lower: &str) -> bool {
    needle_lower.is_empty() || record.name.to_lowercase().contains(needle_lower)
}

fn matches_letter(record: &Record, letter: Option<char>) -> bool {
    match letter {
        Some(letter) => record.initial() == Some(letter),
        None => true,
    }
}
