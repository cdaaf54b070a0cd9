use super::message::SnsMessage;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Extension};

/// Receive MediaConvert job notifications from SNS
#[utoipa::path(
    post,
    path = "/webhooks/media-convert",
    request_body(content = String, description = "Signed SNS envelope", content_type = "text/plain"),
    responses(
        (status = 200, description = "Notification accepted"),
        (status = 404, description = "Signature verification failed")
    ),
    tag = "Webhooks"
)]
pub async fn media_convert(
    State(state): State<AppState>,
    Extension(message): Extension<SnsMessage>,
) -> StatusCode {
    state.webhooks.handle(message).await;
    StatusCode::OK
}
