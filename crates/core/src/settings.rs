//! Decoding of the settings document's embedded link lists.
//!
//! `socialLinks` and `footerLinks` arrive as JSON-encoded strings. They are
//! decoded here, once, with an empty list as the fallback for anything that
//! is absent or malformed. View builders only ever see typed links.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Decode a link list attribute.
///
/// Accepts a string holding a JSON array, or an already-structured array.
/// Returns an empty list for `None`, `null`, non-array values, unparsable
/// strings, and arrays whose entries do not match `T`.
pub fn decode_links<T: DeserializeOwned>(raw: Option<&serde_json::Value>) -> Vec<T> {
    let value = match raw {
        Some(serde_json::Value::String(encoded)) => {
            match serde_json::from_str::<serde_json::Value>(encoded) {
                Ok(v) => v,
                Err(_) => return Vec::new(),
            }
        }
        Some(v @ serde_json::Value::Array(_)) => v.clone(),
        _ => return Vec::new(),
    };

    serde_json::from_value(value).unwrap_or_default()
}
