//! Inbound and outbound request bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::proxy::error::ProxyError;

/// Revision number sent with every schedule request.
pub const SCHEDULE_REVISION_LATEST: i64 = -1;

/// Caller's JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InboundRequest {
    #[serde(default)]
    pub date: Option<String>,
}

impl InboundRequest {
    /// Parse a raw request body.
    ///
    /// A non-empty body declared as `application/json` must be a JSON object
    /// or array, otherwise the request is rejected. Bodies of any other type,
    /// and empty bodies, are read leniently: anything unparsable yields an
    /// empty request. A `date` that is not a JSON string is ignored.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, ProxyError> {
        let parsed = serde_json::from_slice::<Value>(body);

        if !body.is_empty() && content_type.is_some_and(is_json_content_type) {
            match &parsed {
                Ok(Value::Object(_)) | Ok(Value::Array(_)) => {}
                Ok(_) => {
                    return Err(ProxyError::MalformedBody(
                        "top-level value must be an object or array".to_string(),
                    ))
                }
                Err(e) => return Err(ProxyError::MalformedBody(e.to_string())),
            }
        }

        let date = match parsed {
            Ok(Value::Object(mut fields)) => match fields.remove("date") {
                Some(Value::String(date)) => Some(date),
                _ => None,
            },
            _ => None,
        };
        Ok(Self { date })
    }
}

/// `application/json`, parameters such as `charset` ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Body posted to the external API. Field names are fixed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundPayload {
    pub date: String,
    pub schd_rev_no: i64,
    pub user_name: String,
    pub util_acronym_list: Vec<String>,
    pub util_region_id_list: Vec<i64>,
}

impl OutboundPayload {
    pub fn new(date: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            schd_rev_no: SCHEDULE_REVISION_LATEST,
            user_name: user_name.into(),
            util_acronym_list: Vec::new(),
            util_region_id_list: Vec::new(),
        }
    }
}

/// Picks the caller's date, falling back to the configured default.
/// Empty strings on either side count as absent.
pub fn resolve_date<'a>(
    requested: Option<&'a str>,
    default: Option<&'a str>,
) -> Option<&'a str> {
    requested
        .filter(|d| !d.is_empty())
        .or(default.filter(|d| !d.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let payload = OutboundPayload::new("2024-03-01", "ops-team");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "Date": "2024-03-01",
                "SchdRevNo": -1,
                "UserName": "ops-team",
                "UtilAcronymList": [],
                "UtilRegionIdList": []
            })
        );
    }

    const JSON: Option<&str> = Some("application/json");

    fn lenient(body: &[u8]) -> InboundRequest {
        InboundRequest::from_body(None, body).unwrap()
    }

    #[test]
    fn test_inbound_parse() {
        let req = InboundRequest::from_body(JSON, br#"{"date": "2024-03-01", "extra": 1}"#)
            .unwrap();
        assert_eq!(req.date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_inbound_parse_lenient() {
        assert_eq!(lenient(b""), InboundRequest::default());
        assert_eq!(lenient(b"not json"), InboundRequest::default());
        assert_eq!(lenient(b"[1,2]"), InboundRequest::default());
        assert_eq!(lenient(br#"{"date": 20240301}"#), InboundRequest::default());
        assert_eq!(lenient(br#"{"date": null}"#), InboundRequest::default());

        let text = InboundRequest::from_body(Some("text/plain"), br#"{"date": "2024-0"#).unwrap();
        assert_eq!(text, InboundRequest::default());
    }

    #[test]
    fn test_json_body_must_parse() {
        let err = InboundRequest::from_body(JSON, br#"{"date": "2024-0"#).unwrap_err();
        assert!(matches!(err, ProxyError::MalformedBody(_)));

        let err = InboundRequest::from_body(
            Some("Application/JSON; charset=utf-8"),
            br#""2024-03-01""#,
        )
        .unwrap_err();
        assert!(matches!(err, ProxyError::MalformedBody(_)));
    }

    #[test]
    fn test_empty_json_body_is_accepted() {
        assert_eq!(InboundRequest::from_body(JSON, b"").unwrap(), InboundRequest::default());
        assert_eq!(InboundRequest::from_body(JSON, b"[]").unwrap(), InboundRequest::default());
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/jsonl"));
    }

    #[test]
    fn test_resolve_date() {
        assert_eq!(resolve_date(Some("a"), Some("b")), Some("a"));
        assert_eq!(resolve_date(None, Some("b")), Some("b"));
        assert_eq!(resolve_date(Some(""), Some("b")), Some("b"));
        assert_eq!(resolve_date(Some(""), Some("")), None);
        assert_eq!(resolve_date(None, None), None);
    }
}
