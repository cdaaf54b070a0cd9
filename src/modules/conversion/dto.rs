use serde::Deserialize;
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConversionRequest {
    /// Source file path, relative to the bucket root.
    #[validate(length(min = 1, message = "Input path is required"))]
    pub input_path: String,
    pub input_bucket: Option<String>,
    /// Output prefix, relative to the bucket root.
    #[validate(length(min = 1, message = "Destination path is required"))]
    pub destination_path: String,
    pub destination_bucket: Option<String>,
    /// Echoed back in every job notification.
    #[serde(default)]
    pub user_metadata: HashMap<String, String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    #[validate(range(min = -50, max = 50, message = "Priority must be between -50 and 50"))]
    pub priority: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateConversionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn minimal_request_is_valid() {
        let req = request(json!({ "input_path": "in.mov", "destination_path": "out/" }));

        assert!(req.validate().is_ok());
        assert_eq!(req.priority, 0);
    }

    #[test]
    fn empty_paths_and_out_of_range_priority_are_rejected() {
        let req = request(json!({ "input_path": "", "destination_path": "", "priority": 51 }));

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("input_path"));
        assert!(fields.contains_key("destination_path"));
        assert!(fields.contains_key("priority"));
    }
}
