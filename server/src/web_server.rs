use std::future::Future;
use std::path::Path;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};
use common::log;

use crate::api_handlers::{move_handler, restart_handler, state_handler};
use crate::game_host::GameHost;

#[derive(Clone)]
pub struct WebServerState {
    pub host: GameHost,
}

/// API routes plus the renderer's static files. Unknown paths get
/// `index.html` so client side routes survive a reload.
pub fn build_router(state: WebServerState, static_files_path: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(static_files_path)
        .fallback(ServeFile::new(static_files_path.join("index.html")));

    Router::new()
        .route("/api/state", get(state_handler))
        .route("/api/move", post(move_handler))
        .route("/api/restart", post(restart_handler))
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(
    host: GameHost,
    bind_address: &str,
    static_files_path: &Path,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(WebServerState { host }, static_files_path);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Web server listening on http://{}", listener.local_addr()?);
    log!("Static files will be served from: {}", static_files_path.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
