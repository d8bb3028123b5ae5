//! Main application component.

use yew::prelude::*;

use crate::pages::DashboardPage;

/// Main application component.
///
/// Mounts the dashboard with freeform lecture editing; pass
/// `EditOptions::select(...)` to offer a fixed lecture list instead.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-container">
            <main class="main-content">
                <DashboardPage />
            </main>
        </div>
    }
}
