use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Renders a mapping as URL query parameters.
///
/// Everything this protocol emits is URL-safe ASCII, so no percent escaping
/// is involved in either direction.
pub fn to_query(fields: &BTreeMap<String, String>) -> String {
    let mut query = String::new();
    for (key, value) in fields {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}

/// Extracts the flat mapping back out of URL query parameters.
///
/// Pairs without `=` or with an empty key are skipped, the last duplicate
/// wins. Junk that survives this still has to parse as a field downstream.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut fields = BTreeMap::new();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}
