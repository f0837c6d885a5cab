//! Routing module for the pantry API

pub mod health;

use crate::{error::ApiError, state::SharedState};
use axum::{
    body::Body,
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    Router,
};
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let started = Instant::now();

        let res = next.run(req).await;
        let status = res.status();
        let elapsed = started.elapsed();

        if status.is_success() {
            tracing::info!("{} {} -> {} ({:?})", method, uri, status, elapsed);
        } else {
            tracing::warn!("{} {} -> {} ({:?})", method, uri, status, elapsed);
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::shopping_list::routes())
        .merge(crate::recipes::routes())
        .merge(health::routes())
        .fallback(unknown_route)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
