use serde::Deserialize;

/// Failure body of the contact endpoint. Any other keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Server-provided detail, if it is a non-empty string.
    pub fn from_json(body: &serde_json::Value) -> Option<String> {
        serde_json::from_value::<ErrorBody>(body.clone())
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            ErrorBody::from_json(&json!({ "error": "Invalid email" })),
            Some("Invalid email".to_string())
        );
        assert_eq!(ErrorBody::from_json(&json!({ "message": "nope" })), None);
        assert_eq!(ErrorBody::from_json(&json!({ "error": "" })), None);
        assert_eq!(ErrorBody::from_json(&json!({ "error": 42 })), None);
        assert_eq!(ErrorBody::from_json(&json!([1, 2, 3])), None);
        assert_eq!(ErrorBody::from_json(&json!(null)), None);
    }
}
