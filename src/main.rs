mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Values in `.env` fill in whatever the real environment leaves unset.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ledgerly=debug")))
        .init();

    let config = config::ServerConfig::from_env();
    let directory = services::users::UserDirectory::load(&config.seed_file).expect("seed directory load failed");
    tracing::info!(
        seed = %config.seed_file.display(),
        users = directory.users().len(),
        companies = directory.companies().len(),
        "directory loaded"
    );

    let port = config.port;
    let sweep_every = config.session_sweep_interval;
    let state = state::AppState::new(config, directory);

    // Expired sessions are also rejected on lookup; the sweeper only bounds memory.
    let _sweeper = services::session::spawn_session_sweeper(state.sessions.clone(), sweep_every);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ledgerly listening");
    axum::serve(listener, app).await.expect("server failed");
}
