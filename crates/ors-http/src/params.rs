//! GET query-parameter serialization
//!
//! GET endpoints take their request struct flattened into the query
//! string: absent optional fields are omitted entirely, list values are
//! joined with commas, everything else is stringified. Percent-encoding
//! of the joined values is left to the URL layer.

use crate::error::OrsError;
use serde::Serialize;
use serde_json::Value;

/// Serialize a request into `(key, value)` query pairs.
///
/// Non-struct inputs (for example `()` on parameterless endpoints)
/// produce no pairs.
///
/// # Errors
///
/// Returns `OrsError::Serialize` if the request cannot be represented as
/// JSON (non-finite floats, map keys that are not strings).
pub fn to_query_pairs<T>(request: &T) -> Result<Vec<(String, String)>, OrsError>
where
    T: Serialize + ?Sized,
{
    let Value::Object(map) = serde_json::to_value(request)? else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_string)
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push((key, joined));
            }
            other => pairs.push((key, scalar_string(&other))),
        }
    }

    Ok(pairs)
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ors_core::geocoding::{GeocodeLayer, GeocodeSearchRequest};

    fn pair<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_list_values_are_comma_joined() {
        let request = GeocodeSearchRequest {
            text: "Berlin".to_string(),
            layers: Some(vec![GeocodeLayer::Locality, GeocodeLayer::Region]),
            ..Default::default()
        };

        let pairs = to_query_pairs(&request).unwrap();
        assert_eq!(pair(&pairs, "layers"), Some("locality,region"));
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let request = GeocodeSearchRequest {
            text: "Berlin".to_string(),
            ..Default::default()
        };

        let pairs = to_query_pairs(&request).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pair(&pairs, "text"), Some("Berlin"));
        assert_eq!(pair(&pairs, "size"), None);
    }

    #[test]
    fn test_numbers_and_bools_are_stringified() {
        #[derive(Serialize)]
        struct Params {
            size: u32,
            enabled: bool,
        }

        let pairs = to_query_pairs(&Params {
            size: 5,
            enabled: true,
        })
        .unwrap();
        assert_eq!(pair(&pairs, "size"), Some("5"));
        assert_eq!(pair(&pairs, "enabled"), Some("true"));
    }

    #[test]
    fn test_coordinate_pairs_join_like_the_upstream_expects() {
        #[derive(Serialize)]
        struct Params {
            start: [f64; 2],
            end: [f64; 2],
        }

        let pairs = to_query_pairs(&Params {
            start: [8.681495, 49.41461],
            end: [8.687872, 49.420318],
        })
        .unwrap();
        assert_eq!(pair(&pairs, "start"), Some("8.681495,49.41461"));
        assert_eq!(pair(&pairs, "end"), Some("8.687872,49.420318"));
    }

    #[test]
    fn test_unit_input_yields_no_pairs() {
        let pairs = to_query_pairs(&()).unwrap();
        assert!(pairs.is_empty());
    }
}
