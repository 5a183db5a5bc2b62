pub mod api;

use crate::app::shell;
use crate::model::AppState;
use axum::Router;
use leptos_axum::{AxumRouteListing, LeptosRoutes, file_and_error_handler};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes())
        .leptos_routes(
            &app_state,
            leptos_routes,
            {
                let options = app_state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler::<AppState, _>(shell))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
