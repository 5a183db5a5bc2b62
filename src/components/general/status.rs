use crate::model::ApiStatus;
use leptos::prelude::*;

#[component]
pub fn StatusIndicator(#[prop(into)] status: Signal<ApiStatus>) -> impl IntoView {
    view! {
        <div class="status-indicator" id="statusIndicator">
            <span class=move || status.with(ApiStatus::dot_class)></span>
            <span id="statusText">{move || status.with(ApiStatus::label)}</span>
        </div>
    }
}
