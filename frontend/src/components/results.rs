//! Result panels for a completed analysis.
//!
//! The text of each panel comes from a pure function over the payload, so
//! re-rendering the same result always produces identical output. Nothing is
//! interpreted, truncated or paginated client-side; the backend-provided
//! sizes are authoritative.

use leptos::*;
use serde_json::json;

use crate::types::AnalysisResult;

/// `{filename, rows, columns}` as pretty-printed JSON.
pub fn summary_text(result: &AnalysisResult) -> String {
    pretty(&json!({
        "filename": result.filename,
        "rows": result.rows,
        "columns": result.columns,
    }))
}

/// The preview rows, order preserved.
pub fn preview_text(result: &AnalysisResult) -> String {
    pretty(&serde_json::Value::Array(result.preview.clone()))
}

/// The dashboard spec, verbatim.
pub fn dashboard_spec_text(result: &AnalysisResult) -> String {
    pretty(&result.dashboard_spec)
}

/// The Power BI block (DAX + visual suggestions), verbatim.
pub fn powerbi_text(result: &AnalysisResult) -> String {
    pretty(&result.powerbi)
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn ResultsSection(result: AnalysisResult) -> impl IntoView {
    let summary = summary_text(&result);
    let preview = preview_text(&result);
    let dashboard_spec = dashboard_spec_text(&result);
    let powerbi = powerbi_text(&result);
    let insights = result.insights;

    view! {
        <div class="results-section">
            <ResultPanel title="Summary" body=summary/>
            <ResultPanel title="Dataset Preview" body=preview/>
            <ResultPanel title="Dashboard Spec" body=dashboard_spec/>

            <h2>"Insights"</h2>
            <ul class="insights-list">
                <For
                    each=move || insights.clone().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, line)| view! { <li>{line}</li> }
                />
            </ul>

            <ResultPanel title="Power BI (DAX + Visual suggestions)" body=powerbi/>
        </div>
    }
}

#[component]
fn ResultPanel(title: &'static str, body: String) -> impl IntoView {
    view! {
        <h2>{title}</h2>
        <pre class="result-block">{body}</pre>
    }
}
