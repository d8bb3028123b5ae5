//! Loading spinner shown while the first fetch is in flight.

use yew::prelude::*;

/// Loading spinner component.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="loading-label">{"Loading schedule…"}</p>
        </div>
    }
}
