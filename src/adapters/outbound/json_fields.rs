//! Field extraction helpers shared by the JSON adapters.
//!
//! Lookups use JSON pointers so nested objects (`/connection/isp`) need no
//! intermediate structs.

use serde_json::Value;

/// Non-blank string at `pointer`, trimmed. Numbers are stringified.
pub(crate) fn text(body: &Value, pointer: &str) -> Option<String> {
    match body.pointer(pointer)? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite number at `pointer`. Numeric strings are accepted.
pub(crate) fn number(body: &Value, pointer: &str) -> Option<f64> {
    let value = match body.pointer(pointer)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_trims_and_drops_blank() {
        let body = json!({"city": "  Lyon ", "region": "", "zip": "   ", "asn": 15169, "org": null});

        assert_eq!(text(&body, "/city"), Some("Lyon".to_string()));
        assert_eq!(text(&body, "/region"), None);
        assert_eq!(text(&body, "/zip"), None);
        assert_eq!(text(&body, "/asn"), Some("15169".to_string()));
        assert_eq!(text(&body, "/org"), None);
        assert_eq!(text(&body, "/missing"), None);
    }

    #[test]
    fn test_text_nested_pointer() {
        let body = json!({"connection": {"isp": "Google LLC"}, "timezone": {"id": "America/Chicago"}});

        assert_eq!(text(&body, "/connection/isp"), Some("Google LLC".to_string()));
        assert_eq!(text(&body, "/timezone/id"), Some("America/Chicago".to_string()));
        assert_eq!(text(&body, "/timezone"), None);
    }

    #[test]
    fn test_number_variants() {
        let body = json!({"lat": 37.4, "lon": "-122.1", "zero": 0, "bad": "north", "flag": true});

        assert_eq!(number(&body, "/lat"), Some(37.4));
        assert_eq!(number(&body, "/lon"), Some(-122.1));
        assert_eq!(number(&body, "/zero"), Some(0.0));
        assert_eq!(number(&body, "/bad"), None);
        assert_eq!(number(&body, "/flag"), None);
        assert_eq!(number(&body, "/missing"), None);
    }
}
