use leptos::*;

use crate::config::API_BASE;
use crate::services::check_health;

/// Backend reachability, as shown in the header.
#[derive(Clone, Copy, Debug, PartialEq)]
enum BackendStatus {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn Header() -> impl IntoView {
    let (status, set_status) = create_signal(BackendStatus::Checking);

    // One probe at mount. Uploads are never gated on the outcome.
    spawn_local(async move {
        match check_health(API_BASE).await {
            Ok(health) => {
                log::info!("Backend online: {}", health.status);
                set_status.set(BackendStatus::Online);
            }
            Err(e) => {
                log::warn!("Backend health check failed: {}", e);
                set_status.set(BackendStatus::Offline);
            }
        }
    });

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"DASHGEN"</a>
            </div>
            <div class="header-right">
                <div
                    class="backend-status"
                    class:connected=move || status.get() == BackendStatus::Online
                >
                    <span
                        class="status-dot"
                        class:connected=move || status.get() == BackendStatus::Online
                    ></span>
                    <span>
                        {move || match status.get() {
                            BackendStatus::Checking => "Checking backend...",
                            BackendStatus::Online => "Backend online",
                            BackendStatus::Offline => "Backend offline",
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
