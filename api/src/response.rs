use serde::Serialize;

/// Standardized wrapper for JSON responses of the grading endpoints.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Exam evaluated"
/// }
/// ```
///
/// Error responses carry `T::default()` as `data`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_envelope() {
        let value: Value = serde_json::to_value(ApiResponse::success(3, "ok")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 3);
        assert_eq!(value["message"], "ok");
    }

    #[test]
    fn test_error_envelope_uses_default_data() {
        let value: Value =
            serde_json::to_value(ApiResponse::<Option<u8>>::error("nope")).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["data"].is_null());
        assert_eq!(value["message"], "nope");
    }
}
