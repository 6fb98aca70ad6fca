use serde::{Deserialize, Serialize};

/// Envelope of every response body.
///
/// `data` is only set when there is a payload worth returning: created and
/// fetched rows, and the row that was just marked as deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Response<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_camel_case_envelope() {
        let res = Response::success("Checked in marked as deleted", Some(json!({"isDeleted": true})));
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({
                "success": true,
                "message": "Checked in marked as deleted",
                "data": { "isDeleted": true }
            })
        );

        let res = Response::<()>::failure("Checked in not found");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({ "success": false, "message": "Checked in not found", "data": null })
        );
    }
}
