use anyhow::{Context, Result};
use std::time::Duration;

use tower_http::services::ServeDir;
use tracing::{error, info};

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{api_routes, html_routes, log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub albums_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Response {
    let albums_count = match state.album_store.get_albums_count() {
        Ok(count) => count,
        Err(err) => {
            error!("Failed to read albums count: {:#}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums_count,
    };
    Json(stats).into_response()
}

pub fn make_app(config: ServerConfig, album_store: GuardedAlbumStore) -> Router {
    let css_dir = config.static_dir.join("css");
    let state = ServerState::new(config, album_store);

    let api_routes: Router = Router::new()
        .route("/api/artist", get(api_routes::get_api_artist))
        .route("/albums/{artist}", get(api_routes::get_artist_albums))
        .with_state(state.clone());

    let html_routes: Router = Router::new()
        .route("/artist", get(html_routes::get_artist_page))
        .route(
            "/new_artist",
            get(html_routes::get_new_artist_page).post(html_routes::post_new_artist),
        )
        .route("/hello/{name}", get(html_routes::get_hello))
        .with_state(state.clone());

    let home_router: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone());

    home_router
        .merge(api_routes)
        .merge(html_routes)
        .nest_service("/css", ServeDir::new(css_dir))
        .layer(middleware::from_fn_with_state(state, log_requests))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, album_store: GuardedAlbumStore) -> Result<()> {
    let address = format!("{}:{}", config.host, config.port);
    let app = make_app(config, album_store);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Ready to serve at {}!", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
