use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn UserForm(
    name: RwSignal<String>,
    email: RwSignal<String>,
    submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            id="userForm"
            class="user-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <div class="input-with-label">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    class="text-input"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="input-with-label">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    class="text-input"
                    placeholder="name@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="button">
                "Add User"
            </button>
        </form>
    }
}
