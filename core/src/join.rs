use crate::models::{CombinedRecord, MemberLink, PerformerRecord, RelationIndex, RelationRecord, Show};
use crate::string_normalization::{map_search_url, wiki_url};
use rustc_hash::FxHashMap;

/// Flattens every (location, date) pair of a relation record into shows.
///
/// Shows follow the location order of the record, then the date order within
/// each location.
pub fn flatten_shows(relation: &RelationRecord) -> Vec<Show> {
    let mut shows = Vec::new();
    for (location, dates) in &relation.dates_locations {
        let map_url = map_search_url(location);
        for date in dates {
            shows.push(Show {
                date: date.clone(),
                location: location.clone(),
                map_url: map_url.clone(),
            });
        }
    }
    shows
}

pub fn member_links(members: &[String]) -> Vec<MemberLink> {
    members
        .iter()
        .map(|member| MemberLink {
            name: member.clone(),
            wiki_url: wiki_url(member),
        })
        .collect()
}

/// Joins performers with their shows, one output record per performer, in
/// performer order. A relation entry repeated for the same id replaces the
/// earlier one.
pub fn combine(performers: Vec<PerformerRecord>, relations: &RelationIndex) -> Vec<CombinedRecord> {
    let mut shows_by_id: FxHashMap<i64, Vec<Show>> =
        FxHashMap::with_capacity_and_hasher(relations.index.len(), Default::default());
    for relation in &relations.index {
        shows_by_id.insert(relation.id, flatten_shows(relation));
    }

    performers
        .into_iter()
        .map(|performer| {
            let shows = shows_by_id.get(&performer.id).cloned().unwrap_or_default();
            let members_rich = member_links(&performer.members);
            CombinedRecord {
                performer,
                shows,
                members_rich,
            }
        })
        .collect()
}
