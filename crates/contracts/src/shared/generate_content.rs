//! Wire format of the remote generative-text endpoint
//!
//! Request: `{"contents":[{"parts":[{"text": "..."}]}]}`
//! Success: `{"candidates":[{"content":{"parts":[{"text": "..."}]}}]}`
//! Error:   `{"error":{"message": "..."}}`

use super::errors::SendError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body carrying exactly one user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn single_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: text.into() }],
            }],
        }
    }
}

/// Success body. Every level is optional: a missing level means "no content".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, empty strings count as absent
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

/// Error body of a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorResponse {
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()?
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
    }
}

/// What the transport hands back: status line plus raw body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub ok: bool,
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            ok: true,
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn failure(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }
}

/// Classify a response: assistant text on success, typed error otherwise.
///
/// The body must be valid JSON in both branches; a body that parses but has
/// an unexpected shape is treated as missing fields, not as a parse failure.
pub fn interpret_response(response: &RawResponse) -> Result<String, SendError> {
    let value: Value = serde_json::from_str(&response.body)?;

    if !response.ok {
        log::error!("API Error: {}", value);
        let message = ApiErrorResponse::deserialize(&value)
            .ok()
            .and_then(|e| e.message().map(str::to_owned))
            .unwrap_or_else(|| response.status_text.clone());
        return Err(SendError::RemoteApi(message));
    }

    match GenerateContentResponse::deserialize(&value)
        .ok()
        .and_then(|r| r.first_text().map(str::to_owned))
    {
        Some(text) => Ok(text),
        None => {
            log::warn!("No content received: {}", value);
            Err(SendError::MalformedResponse)
        }
    }
}
