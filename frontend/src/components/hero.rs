//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Automated Dashboard Generator & Insights Provider"</h1>
            <p class="subtitle">
                "Upload a CSV or Excel file to get a dashboard spec, insights "
                "and Power BI suggestions."
            </p>
        </div>
    }
}
