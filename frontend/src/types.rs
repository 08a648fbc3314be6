//! Common types used across the frontend application.

use serde::{Deserialize, Serialize};

/// Parsed response from the analysis endpoint.
///
/// Every field carries `#[serde(default)]`: the backend is free to omit or
/// reorder fields and the client renders whatever arrived. `dashboard_spec`
/// and `powerbi` are opaque structures the backend does not guarantee a
/// schema for, so they stay as raw JSON values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Echoed input filename.
    #[serde(default)]
    pub filename: String,
    /// Dataset row count.
    #[serde(default)]
    pub rows: u64,
    /// Dataset column count.
    #[serde(default)]
    pub columns: u64,
    /// Bounded sample of rows, one record per row, order preserved.
    #[serde(default)]
    pub preview: Vec<serde_json::Value>,
    /// Declarative chart/layout description, rendered verbatim.
    #[serde(default)]
    pub dashboard_spec: serde_json::Value,
    /// Human-readable observations.
    #[serde(default)]
    pub insights: Vec<String>,
    /// DAX expressions and visual suggestions, rendered verbatim.
    #[serde(default)]
    pub powerbi: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "filename": "a.csv",
            "rows": 10,
            "columns": 3,
            "preview": [{"x": 1}],
            "dashboard_spec": {"charts": []},
            "insights": ["ok"],
            "powerbi": {"dax": []}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.filename, "a.csv");
        assert_eq!(result.rows, 10);
        assert_eq!(result.columns, 3);
        assert_eq!(result.preview, vec![json!({"x": 1})]);
        assert_eq!(result.dashboard_spec, json!({"charts": []}));
        assert_eq!(result.insights, vec!["ok".to_string()]);
        assert_eq!(result.powerbi, json!({"dax": []}));
    }

    #[test]
    fn test_missing_insights_default_to_empty() {
        let json = r#"{"filename": "a.csv", "rows": 1, "columns": 1}"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.insights.is_empty());
        assert!(result.preview.is_empty());
        assert_eq!(result.dashboard_spec, serde_json::Value::Null);
    }

    #[test]
    fn test_additional_fields_tolerated() {
        let json = r#"{"filename": "a.csv", "rows": 2, "columns": 2, "model_version": "v3"}"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rows, 2);
    }

    #[test]
    fn test_preview_order_preserved() {
        let json = r#"{"preview": [{"id": 1}, {"id": 2}, {"id": 3}]}"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = result
            .preview
            .iter()
            .map(|row| row["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
