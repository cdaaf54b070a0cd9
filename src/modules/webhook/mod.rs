use crate::state::AppState;
use axum::middleware;
use axum::routing::post;
use axum::Router;

pub mod events;
pub mod handler;
pub mod message;
pub mod service;
pub mod validator;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/media-convert", post(handler::media_convert))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::verify_signature::verify_signature_middleware,
        ))
}
