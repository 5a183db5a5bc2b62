use crate::model::functions::UserStore;
use axum::extract::FromRef;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub store: UserStore,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: leptos::prelude::LeptosOptions) -> Self {
        Self {
            store: UserStore::default(),
            leptos_options,
        }
    }
}
