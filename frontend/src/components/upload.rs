//! File chooser and submit control driving the request lifecycle.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::config::{ACCEPTED_EXTENSIONS, API_BASE};
use crate::services::upload_for_analysis;
use crate::state::RequestState;

#[component]
pub fn UploadSection(
    state: ReadSignal<RequestState>,
    set_state: WriteSignal<RequestState>,
    selected_file: ReadSignal<Option<File>>,
    set_selected_file: WriteSignal<Option<File>>,
) -> impl IntoView {
    // Replaces the selection unconditionally. The extension filter on the
    // input is advisory; nothing is validated here.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        if let Some(file) = &file {
            log::info!("Selected file: {}", file.name());
        }
        set_selected_file.set(file);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // No file selected: silently ignored, no state change.
        let Some(file) = selected_file.get_untracked() else {
            return;
        };

        // Single mutation entry point; rejects a second submit while one
        // request is in flight.
        let started = set_state
            .try_update(|s| s.begin(true))
            .unwrap_or(false);
        if !started {
            return;
        }

        log::info!("Uploading {} for analysis...", file.name());

        spawn_local(async move {
            let outcome = upload_for_analysis(file, API_BASE).await;
            match &outcome {
                Ok(result) => log::info!(
                    "Analysis ready: {} rows, {} columns",
                    result.rows,
                    result.columns
                ),
                Err(e) => log::error!("Analysis failed: {}", e),
            }
            set_state.update(|s| s.resolve(outcome));
        });
    };

    view! {
        <form class="upload-section" on:submit=on_submit>
            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSIONS
                on:change=on_file_change
            />

            <span class="upload-hint">
                {move || match selected_file.get() {
                    Some(file) => file.name(),
                    None => "No file selected".to_string(),
                }}
            </span>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || state.with(|s| s.is_submitting())
            >
                {move || if state.with(|s| s.is_submitting()) {
                    "Analyzing..."
                } else {
                    "Analyze"
                }}
            </button>

            <Show
                when=move || state.with(|s| s.error().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || state.with(|s| s.error().unwrap_or_default().to_string())}
                </div>
            </Show>
        </form>
    }
}
