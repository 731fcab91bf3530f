mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // Missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::from_config(&config).expect("downstream client init failed");

    tracing::info!(
        service = config.service.as_str(),
        orders_file = %state.orders.path().display(),
        delivery = if config.mail.resend_api_key.is_some() { "resend" } else { "simulated" },
        "services configured"
    );

    let app = routes::app(state, config.service);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, service = config.service.as_str(), "cardshop listening");
    axum::serve(listener, app).await.expect("server failed");
}
