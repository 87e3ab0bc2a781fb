// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Startup and execution of the HTTP server.
//!
//! ## Routes
//!
//! - `POST /graphql` executes a GraphQL request against the chain schema
//! - `GET /graphql` serves the GraphiQL explorer
//! - `GET /health` answers `OK`
//!
//! ## Middleware
//!
//! - **CORS:** permissive `tower_http::cors::CorsLayer` (any origin, method
//!   and header), applied when `http.cors.enabled` is set.
//! - **Body limit:** `RequestBodyLimitLayer` sized by `http.max_body_size`.
//! - **Tracing:** `TraceLayer` recording every request as a span.

pub mod chain;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::Error;
use crate::state::AppState;

/// Builds the gateway router with its middleware.
pub fn router(app_state: Arc<AppState>) -> Router {
    let http = &app_state.config().http;
    let max_body_size = http.max_body_size;
    let cors_enabled = http.cors.enabled;

    let schema = chain::graphql::schema(app_state.clone());

    let mut router = Router::new()
        .route(
            "/graphql",
            get(chain::graphiql).post(chain::graphql_handler),
        )
        .route("/health", get(|| async { "OK" }))
        .with_state(schema)
        .layer(RequestBodyLimitLayer::new(max_body_size));

    if cors_enabled {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors_layer);
        info!("CORS middleware applied");
    } else {
        info!("CORS disabled. Skipping CORS middleware");
    }

    router.layer(TraceLayer::new_for_http())
}

/// Binds `http.bind_address` and serves until CTRL+C.
pub async fn run_server(app_state: Arc<AppState>) -> Result<(), Error> {
    let bind_address = app_state.config().http.bind_address;

    let listener = TcpListener::bind(bind_address).await.map_err(|e| {
        error!(address = %bind_address, error = %e, "Failed to bind HTTP listener");
        Error::Transport(format!("Failed to bind to {bind_address}: {e}"))
    })?;

    serve(listener, app_state, shutdown_signal()).await
}

/// Serves the gateway on an already bound listener until `shutdown`
/// completes.
pub async fn serve<F>(
    listener: TcpListener,
    app_state: Arc<AppState>,
    shutdown: F,
) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr: SocketAddr = listener.local_addr().map_err(|e| {
        Error::Transport(format!("Failed to get local address: {e}"))
    })?;
    info!(
        address = %local_addr,
        node = %app_state.config().node.url,
        "GraphQL gateway listening"
    );

    axum::serve(listener, router(app_state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| {
            error!(address = %local_addr, error = %e, "HTTP server failed during operation");
            Error::Transport(format!("HTTP server error: {e}"))
        })?;

    info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received CTRL+C. Shutting down gracefully..."),
        Err(e) => {
            // Without a signal handler the server runs until killed
            warn!(error = %e, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await
        }
    }
}
