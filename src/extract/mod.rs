//! Best-effort normalization of device and location payloads.
//!
//! Upstream clock-in records carry device/location info in whatever shape the
//! mobile client of the day produced: a pre-formatted string, a JSON-encoded
//! string, or a nested object under drifting field names. Normalization runs
//! once, when metrics are derived; every downstream view sees the typed
//! summaries. Extraction never fails; unresolvable shapes degrade to a
//! placeholder.

use crate::utils::formatting::PLACEHOLDER;
use serde_json::Value;

/// Field-name aliases, in priority order.
const DEVICE_BRAND_KEYS: [&str; 2] = ["manufacturer", "brand"];
const DEVICE_MODEL_KEYS: [&str; 2] = ["deviceName", "model"];
const LATITUDE_KEYS: [&str; 2] = ["latitude", "lat"];
const LONGITUDE_KEYS: [&str; 2] = ["longitude", "lng"];

/// Recursion bound for alias search and embedded-JSON expansion.
const MAX_DEPTH: u8 = 8;

/// Normalized location payload: a display string plus coordinates when they
/// could be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSummary {
    pub text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for GeoSummary {
    fn default() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

/// "Brand, Model" when either alias resolves; the payload's own text for a
/// plain string; the raw JSON otherwise.
pub fn device_summary(payload: Option<&Value>) -> String {
    let Some(v) = payload else {
        return PLACEHOLDER.to_string();
    };

    let expanded = expand(v, MAX_DEPTH);
    let brand = find_string(&expanded, &DEVICE_BRAND_KEYS, MAX_DEPTH);
    let model = find_string(&expanded, &DEVICE_MODEL_KEYS, MAX_DEPTH);

    match (brand, model) {
        (Some(b), Some(m)) => format!("{b}, {m}"),
        (Some(b), None) => b,
        (None, Some(m)) => m,
        (None, None) => match &expanded {
            Value::String(s) if !s.trim().is_empty() => s.clone(),
            Value::Null => PLACEHOLDER.to_string(),
            other => other.to_string(),
        },
    }
}

pub fn geo_summary(payload: Option<&Value>) -> GeoSummary {
    let Some(v) = payload else {
        return GeoSummary::default();
    };

    let expanded = expand(v, MAX_DEPTH);
    let latitude = find_number(&expanded, &LATITUDE_KEYS, MAX_DEPTH);
    let longitude = find_number(&expanded, &LONGITUDE_KEYS, MAX_DEPTH);

    let text = match (latitude, longitude) {
        (Some(lat), Some(lng)) => format!("{lat}, {lng}"),
        _ => match &expanded {
            // A non-JSON string is assumed already formatted upstream.
            Value::String(s) if !s.trim().is_empty() => s.clone(),
            _ => PLACEHOLDER.to_string(),
        },
    };

    GeoSummary {
        text,
        latitude,
        longitude,
    }
}

/// Recursively parse strings that look like JSON objects/arrays, so alias
/// search sees one uniform value graph.
fn expand(v: &Value, depth: u8) -> Value {
    if depth == 0 {
        return v.clone();
    }
    match v {
        Value::String(s) => match parse_embedded_json(s) {
            Some(inner) => expand(&inner, depth - 1),
            None => v.clone(),
        },
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, val)| (k.clone(), expand(val, depth - 1)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|val| expand(val, depth - 1)).collect())
        }
        other => other.clone(),
    }
}

fn parse_embedded_json(s: &str) -> Option<Value> {
    let t = s.trim();
    if t.starts_with('{') || t.starts_with('[') {
        serde_json::from_str(t).ok()
    } else {
        None
    }
}

/// Depth-first search for the first occurrence of any alias, in alias
/// priority order (all of `keys[0]` before any `keys[1]`).
fn find_alias(v: &Value, keys: &[&str], depth: u8) -> Option<Value> {
    keys.iter().find_map(|k| find_key(v, k, depth))
}

fn find_key(v: &Value, key: &str, depth: u8) -> Option<Value> {
    if depth == 0 {
        return None;
    }
    match v {
        Value::Object(map) => {
            if let Some(hit) = map.get(key) {
                if !hit.is_null() {
                    return Some(hit.clone());
                }
            }
            map.values().find_map(|val| find_key(val, key, depth - 1))
        }
        Value::Array(items) => items.iter().find_map(|val| find_key(val, key, depth - 1)),
        _ => None,
    }
}

fn find_string(v: &Value, keys: &[&str], depth: u8) -> Option<String> {
    match find_alias(v, keys, depth)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn find_number(v: &Value, keys: &[&str], depth: u8) -> Option<f64> {
    match find_alias(v, keys, depth)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
