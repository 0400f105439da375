//! Normalization of heterogeneous list-endpoint envelopes.
//!
//! The backend does not commit to one response shape: the record array can sit
//! under the pluralized resource name, under a generic `data` wrapper, under a
//! paginated `data.docs`, or the body can be a bare array or a single record.
//! Each known shape is an explicit matcher; they are tried in priority order
//! and the first match wins. An unrecognized envelope yields an empty page,
//! never an error.

use serde_json::Value;

/// Uniform result of one list fetch. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    pub records: Vec<Value>,
    pub total_count: usize,
}

impl ListPage {
    fn new(records: Vec<Value>, total_count: usize) -> Self {
        // The pagination controls rely on total >= page length.
        let total_count = total_count.max(records.len());
        Self { records, total_count }
    }
}

type Matcher = fn(&str, &Value) -> Option<ListPage>;

/// Priority order matters: the pluralized resource key is the most specific
/// shape, the generic `data` wrapper the least.
const MATCHERS: [Matcher; 4] = [
    match_plural_resource,
    match_single_record,
    match_bare_array,
    match_data_wrapper,
];

/// Normalize a list-endpoint body into `(records, total_count)`.
///
/// `resource` is the pluralized resource property to probe first, e.g.
/// `"vendors"` for the vendor list endpoint.
pub fn normalize(resource: &str, body: &Value) -> ListPage {
    for matcher in MATCHERS {
        if let Some(page) = matcher(resource, body) {
            return page;
        }
    }
    ListPage::default()
}

/// Pluralized resource keys the backend is known to use. An endpoint whose
/// envelope carries a different plural than the caller expected still
/// normalizes through these instead of falling through to the generic
/// matchers.
const KNOWN_RESOURCES: [&str; 6] = [
    "users",
    "roles",
    "vendors",
    "categories",
    "advisors",
    "subscriptions",
];

/// `{"vendors": [...], "pagination": {"totalVendors": 42}}` — the caller's
/// resource key is probed first, then the rest of the known plurals.
fn match_plural_resource(resource: &str, body: &Value) -> Option<ListPage> {
    std::iter::once(resource)
        .chain(KNOWN_RESOURCES.iter().copied().filter(|k| *k != resource))
        .find_map(|key| extract_plural(key, body))
}

fn extract_plural(key: &str, body: &Value) -> Option<ListPage> {
    let records = body.get(key)?.as_array()?.clone();
    let total = body
        .get("pagination")
        .and_then(|p| p.get(pagination_total_key(key)))
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(records.len());
    Some(ListPage::new(records, total))
}

/// A single record returned where a list was expected.
fn match_single_record(_resource: &str, body: &Value) -> Option<ListPage> {
    if looks_like_record(body) {
        Some(ListPage::new(vec![body.clone()], 1))
    } else {
        None
    }
}

/// A bare array whose first element looks like a record.
fn match_bare_array(_resource: &str, body: &Value) -> Option<ListPage> {
    let items = body.as_array()?;
    if looks_like_record(items.first()?) {
        let len = items.len();
        Some(ListPage::new(items.clone(), len))
    } else {
        None
    }
}

/// Generic `data` wrapper: plain array, paginated `{docs, totalDocs}`, or a
/// single wrapped object.
fn match_data_wrapper(_resource: &str, body: &Value) -> Option<ListPage> {
    let data = body.get("data")?;
    if let Some(items) = data.as_array() {
        let len = items.len();
        return Some(ListPage::new(items.clone(), len));
    }
    if let Some(docs) = data.get("docs").and_then(Value::as_array) {
        let total = data
            .get("totalDocs")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .unwrap_or(docs.len());
        return Some(ListPage::new(docs.clone(), total));
    }
    if data.is_object() {
        return Some(ListPage::new(vec![data.clone()], 1));
    }
    None
}

/// `"vendors"` -> `"totalVendors"`.
fn pagination_total_key(resource: &str) -> String {
    let mut chars = resource.chars();
    match chars.next() {
        Some(first) => format!("total{}{}", first.to_uppercase(), chars.as_str()),
        None => "total".to_string(),
    }
}

/// Heuristic for "this object is one record": it carries an identifier and at
/// least one name-like field.
pub fn looks_like_record(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    let has_id = value.get("id").is_some() || value.get("_id").is_some();
    let has_name = ["name", "title", "username", "fullName", "email"]
        .iter()
        .any(|key| value.get(*key).is_some());
    has_id && has_name
}

/// Extract the record identifier, accepting both `id` and `_id`, string or
/// integer valued.
pub fn record_id(record: &Value) -> Option<String> {
    let id = record.get("id").or_else(|| record.get("_id"))?;
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the active flag when the record carries one.
pub fn record_is_active(record: &Value) -> Option<bool> {
    record
        .get("isActive")
        .or_else(|| record.get("is_active"))
        .and_then(Value::as_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plural_resource_with_pagination_total() {
        let body = json!({
            "vendors": [
                {"id": "v1", "name": "Acme"},
                {"id": "v2", "name": "Globex"}
            ],
            "pagination": {"totalVendors": 17}
        });
        let page = normalize("vendors", &body);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_count, 17);
    }

    #[test]
    fn plural_resource_without_pagination_falls_back_to_len() {
        let body = json!({"categories": [{"id": 1, "name": "Books"}]});
        let page = normalize("categories", &body);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn other_known_plural_is_probed_as_fallback() {
        // Endpoint declared as "vendors" but answering with a "users"
        // envelope still normalizes, pagination total included.
        let body = json!({
            "users": [{"id": "u1", "username": "admin"}],
            "pagination": {"totalUsers": 4}
        });
        let page = normalize("vendors", &body);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn single_record_is_wrapped() {
        let body = json!({"id": "u1", "username": "admin"});
        let page = normalize("users", &body);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 1);
        assert_eq!(record_id(&page.records[0]).as_deref(), Some("u1"));
    }

    #[test]
    fn bare_array_of_records() {
        let body = json!([
            {"_id": "a1", "name": "First"},
            {"_id": "a2", "name": "Second"}
        ]);
        let page = normalize("advisors", &body);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn bare_array_of_scalars_is_not_a_list() {
        let body = json!([1, 2, 3]);
        let page = normalize("advisors", &body);
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn data_wrapper_array() {
        let body = json!({"data": [{"id": "s1", "name": "Gold"}]});
        let page = normalize("subscriptions", &body);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn data_wrapper_paginated_docs() {
        let body = json!({
            "data": {
                "docs": [{"id": "s1", "name": "Gold"}, {"id": "s2", "name": "Silver"}],
                "totalDocs": 9
            }
        });
        let page = normalize("subscriptions", &body);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_count, 9);
    }

    #[test]
    fn data_wrapper_single_object() {
        let body = json!({"data": {"id": "r1", "name": "Admin"}});
        let page = normalize("roles", &body);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn unknown_envelope_yields_empty_page() {
        let page = normalize("vendors", &json!({"foo": "bar"}));
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, 0);
        let page = normalize("vendors", &json!(null));
        assert!(page.records.is_empty());
    }

    #[test]
    fn page_length_never_exceeds_total() {
        // Backend reporting a stale, too-small total must not break paging.
        let body = json!({
            "vendors": [{"id": "v1", "name": "A"}, {"id": "v2", "name": "B"}],
            "pagination": {"totalVendors": 1}
        });
        let page = normalize("vendors", &body);
        assert!(page.records.len() <= page.total_count);
    }

    #[test]
    fn plural_resource_wins_over_data_wrapper() {
        let body = json!({
            "vendors": [{"id": "v1", "name": "A"}],
            "data": [{"id": "x", "name": "ignored"}, {"id": "y", "name": "ignored"}]
        });
        let page = normalize("vendors", &body);
        assert_eq!(page.records.len(), 1);
    }

    #[test]
    fn record_helpers() {
        assert_eq!(record_id(&json!({"id": 7, "name": "n"})).as_deref(), Some("7"));
        assert_eq!(record_id(&json!({"_id": "abc"})).as_deref(), Some("abc"));
        assert_eq!(record_id(&json!({"name": "n"})), None);
        assert_eq!(record_is_active(&json!({"isActive": true})), Some(true));
        assert_eq!(record_is_active(&json!({"is_active": false})), Some(false));
        assert_eq!(record_is_active(&json!({"name": "n"})), None);
    }
}
