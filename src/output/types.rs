use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "wpenum.v1";

#[derive(Debug, Clone, Serialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Envelope {
    pub fn result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        let res_val = serde_json::to_value(result)?;
        Ok(Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            result: res_val,
            meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_result_envelope() {
        let result = json!({"records": 3});
        let env = Envelope::result("enumerate", &result, Some(Meta { duration_ms: Some(12) })).expect("to serialize result");
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"schema_version\":\"wpenum.v1\""));
        assert!(s.contains("\"op\":\"enumerate\""));
        assert!(s.contains("\"result\":{\"records\":3}"));
        assert!(s.contains("\"duration_ms\":12"));
    }

    #[test]
    fn meta_is_omitted_when_absent() {
        let env = Envelope::result("enumerate", &json!([]), None).unwrap();
        let s = serde_json::to_string(&env).unwrap();
        assert!(!s.contains("\"meta\""));
    }
}
