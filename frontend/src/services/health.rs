//! Liveness probe against the analysis backend.

use gloo_net::http::Request;
use serde::Deserialize;

/// Response of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Asks the backend whether it is up.
///
/// Cosmetic only: a failure dims the header indicator and never blocks an
/// upload attempt.
pub async fn check_health(api_base: &str) -> Result<HealthStatus, String> {
    let url = format!("{}/api/health", api_base);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Server error ({} {})",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialization() {
        let health: HealthStatus = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(health.status, "ok");
    }
}
