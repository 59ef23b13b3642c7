use crate::models::CombinedRecord;
use crate::string_normalization::normalize_query;

/// Case-insensitive substring search over name, members, creation year and
/// first album date. A blank query returns every record.
pub fn filter(records: &[CombinedRecord], query: &str) -> Vec<CombinedRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be normalized.
pub fn matches(record: &CombinedRecord, needle: &str) -> bool {
    let performer = &record.performer;
    performer.name.to_lowercase().contains(needle)
        || performer
            .members
            .iter()
            .any(|member| member.to_lowercase().contains(needle))
        || performer.creation_date.to_string().contains(needle)
        || performer.first_album.to_lowercase().contains(needle)
}

/// Exact match between the decimal form of the record id and `id`.
/// Duplicate ids resolve to the first record.
pub fn find_by_id<'a>(records: &'a [CombinedRecord], id: &str) -> Option<&'a CombinedRecord> {
    records.iter().find(|record| record.id().to_string() == id)
}
