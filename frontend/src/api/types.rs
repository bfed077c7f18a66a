use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Region name to outlet names, in the order the server (or the defaults) list them.
pub type StoreMap = IndexMap<String, Vec<String>>;

/// Uniform outcome of every remote operation: `Ok(data)` or a user-facing `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub nickname: String,
    pub email: String,
    pub state: String,
    pub utm_source: Option<String>,
    pub utm_campaign: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SignupRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub id: String,
    pub nickname: String,
    pub email: String,
    pub state: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub utm_source: Option<String>,
    #[serde(default)]
    pub utm_campaign: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductColor {
    Blue,
    Green,
    Red,
}

impl ProductColor {
    pub fn card_classes(&self) -> &'static str {
        match self {
            ProductColor::Blue => {
                "bg-gradient-to-b from-blue-900/50 to-blue-800/30 border-blue-500/30 hover:border-blue-400"
            }
            ProductColor::Green => {
                "bg-gradient-to-b from-green-900/50 to-green-800/30 border-green-500/30 hover:border-green-400"
            }
            ProductColor::Red => {
                "bg-gradient-to-b from-red-900/50 to-red-800/30 border-red-500/30 hover:border-red-400"
            }
        }
    }

    pub fn accent_classes(&self) -> &'static str {
        match self {
            ProductColor::Blue => "bg-blue-600 hover:bg-blue-700",
            ProductColor::Green => "bg-green-600 hover:bg-green-700",
            ProductColor::Red => "bg-red-600 hover:bg-red-700",
        }
    }

    pub fn title_classes(&self) -> &'static str {
        match self {
            ProductColor::Blue => "text-blue-300",
            ProductColor::Green => "text-green-300",
            ProductColor::Red => "text-red-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub variant: String,
    pub color: ProductColor,
    pub features: Vec<String>,
    pub description: String,
}

/// `{ "data": T, ... }` wrapper used by the catalog endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// Error body shape (`{ "success": false, "message": "..." }`).
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// What went wrong below the operation layer, before it is turned into an `ApiError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("request timed out")]
    Timeout,
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Non-empty message supplied by the server in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TransportError::Request(_) => "REQUEST_FAILED",
            TransportError::Timeout => "TIMEOUT",
            TransportError::Status { .. } => "SERVER_ERROR",
            TransportError::Decode(_) => "INVALID_RESPONSE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    /// Normalizes a transport failure into the envelope error with a fixed message.
    pub fn from_transport(err: &TransportError, fallback: &str) -> Self {
        Self::with_code(fallback, err.code())
    }

    /// Same as [`ApiError::from_transport`], but the server's own message wins when present.
    pub fn from_transport_preferring_server(err: &TransportError, fallback: &str) -> Self {
        let message = err.server_message().unwrap_or(fallback);
        Self::with_code(message, err.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_signup_request_keeps_missing_utm_as_null() {
        let req = SignupRequest {
            nickname: "Ada".into(),
            email: "a@b.com".into(),
            state: "Lagos".into(),
            utm_source: None,
            utm_campaign: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["nickname"], serde_json::json!("Ada"));
        assert!(v.get("utm_source").is_some());
        assert!(v["utm_source"].is_null());
        assert!(v.get("utm_campaign").is_some());
        assert!(v["utm_campaign"].is_null());
    }

    #[wasm_bindgen_test]
    fn deserialize_signup_record_with_mongo_id() {
        let raw = r#"{
            "_id": "65f0c0ffee",
            "id": "s1",
            "nickname": "Ada",
            "email": "a@b.com",
            "state": "Lagos",
            "createdAt": "2025-03-01T10:15:30.123000",
            "utm_source": "ig",
            "utm_campaign": null
        }"#;
        let record: SignupRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, "s1");
        assert_eq!(record.utm_source.as_deref(), Some("ig"));
        assert!(record.utm_campaign.is_none());
        assert_eq!(
            record.created_at.date(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[wasm_bindgen_test]
    fn deserialize_product_color_lowercase() {
        let raw = r#"{
            "id": "xtra", "name": "Fire Xtra", "variant": "Longer Lasting Pleasure",
            "color": "blue", "features": ["a", "b"], "description": "d"
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.color, ProductColor::Blue);
        assert_eq!(product.features, vec!["a".to_string(), "b".to_string()]);
    }

    #[wasm_bindgen_test]
    fn unknown_product_color_is_rejected() {
        let raw = r#"{
            "id": "x", "name": "X", "variant": "V",
            "color": "purple", "features": [], "description": "d"
        }"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }

    #[wasm_bindgen_test]
    fn store_map_preserves_server_order() {
        let raw = r#"{ "Kano": ["a"], "Abuja": ["b"], "Lagos": ["c"] }"#;
        let map: StoreMap = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Kano", "Abuja", "Lagos"]);
    }

    #[wasm_bindgen_test]
    fn data_envelope_tolerates_missing_data() {
        let env: DataEnvelope<Vec<Product>> =
            serde_json::from_str(r#"{ "success": true, "message": "ok" }"#).unwrap();
        assert!(env.data.is_none());
    }
}
