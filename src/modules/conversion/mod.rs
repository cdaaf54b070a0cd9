use crate::state::AppState;
use axum::routing::get;
use axum::Router;

pub mod builder;
pub mod client;
pub mod dto;
pub mod error;
pub mod handler;
pub mod location;
pub mod service;
pub mod settings;
pub mod template;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_conversions).post(handler::create_conversion),
        )
        .route(
            "/{id}",
            get(handler::get_conversion).delete(handler::cancel_conversion),
        )
}
