use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    body::{self, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// SNS caps `Message` at 256 KiB; escaping inside the envelope can nearly double it.
pub const MAX_ENVELOPE_BYTES: usize = 512 * 1024;

pub async fn verify_signature_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();

    let bytes = body::to_bytes(body, MAX_ENVELOPE_BYTES).await.map_err(|e| {
        warn!("Rejected SNS request: unreadable body: {}", e);
        ApiError::not_found()
    })?;

    let message = state.verifier.verify(&bytes).await.map_err(|e| {
        warn!("Rejected SNS request: {}", e);
        ApiError::not_found()
    })?;

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(message);

    Ok(next.run(req).await)
}
