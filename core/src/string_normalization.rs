/// Lowercased, trimmed form of a search query. Blank input yields an empty string.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Turns a location slug such as `north_carolina-usa` into `north carolina, usa`.
pub fn location_label(slug: &str) -> String {
    slug.replace('_', " ").replace('-', ", ")
}

pub fn map_search_url(location_slug: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&location_label(location_slug))
    )
}

pub fn wiki_url(member: &str) -> String {
    format!(
        "https://en.wikipedia.org/wiki/{}",
        urlencoding::encode(&member.replace(' ', "_"))
    )
}
