//! Response shape validation
//!
//! Checks that a status API payload has the expected layout before any
//! record is interpreted. An empty homework list is a valid payload.

use crate::error::ShapeError;
use serde_json::Value;

/// Human-readable JSON type name, used in shape error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate the decoded status API response
///
/// The response must be an object with a `homeworks` array. Returns the
/// homework records in API order; element-level checks happen during
/// verdict rendering.
pub fn check_response(response: &Value) -> Result<&[Value], ShapeError> {
    let Some(fields) = response.as_object() else {
        return Err(ShapeError::NotAnObject {
            actual: json_type_name(response),
        });
    };

    let homeworks = fields.get("homeworks").ok_or(ShapeError::MissingHomeworks)?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ShapeError::HomeworksNotAnArray {
            actual: json_type_name(homeworks),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response_returns_records_in_order() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"},
            ],
            "current_date": 1700000000,
        });

        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn test_empty_homework_list_is_valid() {
        let response = json!({"homeworks": []});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_response_is_rejected() {
        let err = check_response(&json!(["homeworks"])).unwrap_err();
        assert!(matches!(err, ShapeError::NotAnObject { actual: "array" }));
    }

    #[test]
    fn test_missing_homeworks_field_is_rejected() {
        let err = check_response(&json!({"current_date": 1700000000})).unwrap_err();
        assert!(matches!(err, ShapeError::MissingHomeworks));
    }

    #[test]
    fn test_non_array_homeworks_is_rejected() {
        let err = check_response(&json!({"homeworks": "hw1"})).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::HomeworksNotAnArray { actual: "string" }
        ));
    }
}
