//! API Gateway proxy integration payloads.
//!
//! Only the fields the handlers read are modelled; everything else in the
//! event is ignored during deserialization.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Error, Debug)]
pub enum BodyError {
    #[error("body is not valid base64: {0}")]
    Base64(base64::DecodeError),

    #[error("body is not valid UTF-8: {0}")]
    Utf8(std::string::FromUtf8Error),
}

impl ApiGatewayProxyRequest {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            http_method: Some(method.to_string()),
            path: Some(path.to_string()),
            ..Default::default()
        }
    }

    pub fn with_path_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert("id".to_string(), id.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The `{id}` path parameter; blank values count as missing.
    pub fn path_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get("id"))
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn method(&self) -> Option<&str> {
        self.http_method.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|context| context.request_id.as_deref())
    }

    /// Decoded body text. `Ok(None)` for an absent or empty body.
    pub fn body_text(&self) -> Result<Option<String>, BodyError> {
        let raw = match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(None),
        };

        if !self.is_base64_encoded {
            return Ok(Some(raw.to_string()));
        }

        let bytes = STANDARD.decode(raw).map_err(BodyError::Base64)?;
        let text = String::from_utf8(bytes).map_err(BodyError::Utf8)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiGatewayProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyResponse {
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::with_body(status_code, body),
            Err(error) => {
                tracing::error!("Failed to serialize response body: {}", error);
                Self::message(500, "Internal server error")
            }
        }
    }

    pub fn message(status_code: u16, message: &str) -> Self {
        Self::with_body(
            status_code,
            serde_json::json!({ "message": message }).to_string(),
        )
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}
