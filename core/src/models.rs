use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One performer as served by the upstream `/artists` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub first_album: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

/// Tour dates of a single performer, grouped by location slug.
///
/// Locations keep the order in which they appear in the upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: i64,
    #[serde(default)]
    pub dates_locations: IndexMap<String, Vec<String>>,
}

/// Body of the upstream `/relation` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationIndex {
    #[serde(default)]
    pub index: Vec<RelationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub date: String,
    pub location: String,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberLink {
    pub name: String,
    pub wiki_url: String,
}

/// A performer enriched with its flattened show list.
///
/// `shows` is always present; performers without tour data carry an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedRecord {
    #[serde(flatten)]
    pub performer: PerformerRecord,
    pub shows: Vec<Show>,
    pub members_rich: Vec<MemberLink>,
}

impl CombinedRecord {
    pub fn id(&self) -> i64 {
        self.performer.id
    }

    pub fn name(&self) -> &str {
        &self.performer.name
    }
}
