//! HTTP service for submitting a data file to the analysis endpoint.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::types::AnalysisResult;

/// Error body the backend may return on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Message extracted from a failed attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorMessage {
    /// The backend supplied a `detail` field.
    Detail(String),
    /// No usable body; the transport-level description stands in.
    Generic(String),
}

impl ErrorMessage {
    pub fn into_string(self) -> String {
        match self {
            Self::Detail(message) | Self::Generic(message) => message,
        }
    }
}

/// Picks the message for a failed response: the `detail` field of a JSON
/// body when present, any other body shape falls back to the transport
/// description.
pub fn extract_error_message(body: &str, transport: &str) -> ErrorMessage {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => ErrorMessage::Detail(detail),
        _ => ErrorMessage::Generic(transport.to_string()),
    }
}

/// Uploads the selected file for analysis.
///
/// Builds a multipart body with a single part named `file` and POSTs it to
/// `{api_base}/api/analyze/upload`. No extra headers, no timeout, no retry;
/// the caller's UI guard keeps at most one request in flight.
pub async fn upload_for_analysis(file: File, api_base: &str) -> Result<AnalysisResult, String> {
    let form_data =
        FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;

    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("Failed to append file: {:?}", e))?;

    let url = format!("{}/api/analyze/upload", api_base);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        let transport = format!(
            "Server error ({} {})",
            response.status(),
            response.status_text()
        );
        let body = response.text().await.unwrap_or_default();
        return Err(extract_error_message(&body, &transport).into_string());
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
