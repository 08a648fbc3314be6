//! Dashgen - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a tabular data file (CSV/Excel) and
//! rendering the analysis the backend produces: dataset summary, preview
//! rows, a generated dashboard spec, textual insights and Power BI (DAX +
//! visual) suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (backend status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (chooser, submit, error banner)          │
//! │  └── ResultsSection (when an analysis succeeded)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - build-time configuration (API base URL)
//! - [`types`] - wire types ([`AnalysisResult`])
//! - [`state`] - request lifecycle state machine
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - backend communication (upload, health)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types and state
pub use state::RequestState;
pub use types::AnalysisResult;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Dashgen - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // All client state: the chosen file and the lifecycle of the one request.
    // Both live for the tab session only; nothing persists across reloads.
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (state, set_state) = create_signal(RequestState::default());

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection
                state=state
                set_state=set_state
                selected_file=selected_file
                set_selected_file=set_selected_file
            />

            // Result panels appear only after a successful attempt.
            <Show
                when=move || state.with(|s| s.result().is_some())
                fallback=|| view! { }
            >
                {move || {
                    state
                        .with(|s| s.result().cloned())
                        .map(|result| view! { <ResultsSection result=result/> })
                }}
            </Show>
        </div>

        <Footer/>
    }
}
