mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    tracing::info!(endpoint = %config.widget.endpoint_url, "chat widget configured");

    let port = config.port;
    let state = state::AppState::new(config.widget);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "widget host listening");
    axum::serve(listener, app).await.expect("server failed");
}
