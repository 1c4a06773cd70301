//! Total lookups over an event payload. Every accessor answers `None` for a
//! missing key, a `null`, or a value of the wrong shape.

use serde_json::{Map, Value};

pub fn field<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

pub fn object<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    field(payload, key).and_then(Value::as_object)
}

pub fn str_field<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    field(payload, key).and_then(Value::as_str)
}

/// Renders a scalar the way it would read in a sentence. Containers are not
/// scalars.
pub fn scalar(payload: &Map<String, Value>, key: &str) -> Option<String> {
    match field(payload, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `scalar` one level down, e.g. `pull_request.number`.
pub fn nested_scalar(payload: &Map<String, Value>, outer: &str, key: &str) -> Option<String> {
    object(payload, outer).and_then(|inner| scalar(inner, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn scalar_renders_each_json_kind() {
        let p = map(json!({ "s": "main", "n": 3, "f": 1.5, "b": true, "z": null, "a": [1], "o": {} }));
        assert_eq!(scalar(&p, "s").as_deref(), Some("main"));
        assert_eq!(scalar(&p, "n").as_deref(), Some("3"));
        assert_eq!(scalar(&p, "f").as_deref(), Some("1.5"));
        assert_eq!(scalar(&p, "b").as_deref(), Some("true"));
        assert_eq!(scalar(&p, "z"), None);
        assert_eq!(scalar(&p, "a"), None);
        assert_eq!(scalar(&p, "o"), None);
        assert_eq!(scalar(&p, "missing"), None);
    }

    #[test]
    fn nested_scalar_requires_an_object() {
        let p = map(json!({ "pull_request": { "number": 42 }, "release": "v1" }));
        assert_eq!(nested_scalar(&p, "pull_request", "number").as_deref(), Some("42"));
        assert_eq!(nested_scalar(&p, "pull_request", "title"), None);
        assert_eq!(nested_scalar(&p, "release", "tag_name"), None);
        assert_eq!(nested_scalar(&p, "absent", "tag_name"), None);
    }

    #[test]
    fn str_field_ignores_non_strings() {
        let p = map(json!({ "action": 7, "ref_type": "branch" }));
        assert_eq!(str_field(&p, "action"), None);
        assert_eq!(str_field(&p, "ref_type"), Some("branch"));
    }
}
