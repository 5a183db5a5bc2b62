use crate::model::Notification;
use leptos::prelude::*;

#[component]
pub fn Toast(#[prop(into)] notification: Signal<Option<Notification>>) -> impl IntoView {
    view! {
        <div
            id="toast"
            role="status"
            class=move || {
                notification.with(|n| n.as_ref().map(Notification::class).unwrap_or("toast"))
            }
        >
            {move || {
                notification.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default())
            }}
        </div>
    }
}
