//! Document list queries, encoded the way the document store expects them:
//! one JSON object per `queries[]` parameter.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// `attribute == value`.
    Equal { attribute: String, value: String },
    /// Cap on the number of returned documents.
    Limit(u32),
    /// Number of matching documents to skip.
    Offset(u64),
}

#[derive(Serialize)]
struct Encoded<'a> {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<&'a str>,
    values: serde_json::Value,
}

impl Query {
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Equal {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Encode as the value of a `queries[]` parameter.
    pub fn to_param(&self) -> String {
        let encoded = match self {
            Query::Equal { attribute, value } => Encoded {
                method: "equal",
                attribute: Some(attribute.as_str()),
                values: serde_json::json!([value]),
            },
            Query::Limit(n) => Encoded {
                method: "limit",
                attribute: None,
                values: serde_json::json!([n]),
            },
            Query::Offset(n) => Encoded {
                method: "offset",
                attribute: None,
                values: serde_json::json!([n]),
            },
        };
        // Serializing a struct of strings and JSON values cannot fail.
        serde_json::to_string(&encoded).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_encodes_attribute_and_single_value() {
        let param = Query::equal("projectId", "p1").to_param();
        let value: serde_json::Value = serde_json::from_str(&param).unwrap();
        assert_eq!(value["method"], "equal");
        assert_eq!(value["attribute"], "projectId");
        assert_eq!(value["values"], serde_json::json!(["p1"]));
    }

    #[test]
    fn limit_omits_attribute() {
        let param = Query::Limit(25).to_param();
        assert_eq!(param, r#"{"method":"limit","values":[25]}"#);
    }

    #[test]
    fn offset_omits_attribute() {
        let param = Query::Offset(500).to_param();
        assert_eq!(param, r#"{"method":"offset","values":[500]}"#);
    }
}
