#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use leptos_axum::generate_route_list;
    use tracing_subscriber::EnvFilter;
    use user_desk::{app::*, model::AppState, router};

    let env_file = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();
    if env_file.is_err() {
        tracing::warn!("didn't find env file");
    }

    // get_configuration(None) reads cargo-leptos's env values, or the
    // [package.metadata.leptos] table when run without it
    let conf = get_configuration(None)?;
    let leptos_options: LeptosOptions = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let state = AppState::new(leptos_options);
    let app = router::new(routes, state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydrate entry point
}
