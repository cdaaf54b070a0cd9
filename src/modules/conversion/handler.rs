use super::client::{JobDetails, JobPage, ListJobsOptions};
use super::dto::CreateConversionRequest;
use super::service::ConversionService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

/// Submit a new conversion job
#[utoipa::path(
    post,
    path = "/api/v1/conversions",
    request_body = CreateConversionRequest,
    responses(
        (status = 201, description = "Job submitted", body = ApiResponse<JobDetails>),
        (status = 400, description = "Bad Request"),
        (status = 502, description = "MediaConvert rejected the request")
    ),
    tag = "Conversions"
)]
pub async fn create_conversion(
    State(state): State<AppState>,
    Json(payload): Json<CreateConversionRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return ApiError::from(e).into_response();
    }

    match ConversionService::create(state, payload).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Conversion job submitted"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// List conversion jobs
#[utoipa::path(
    get,
    path = "/api/v1/conversions",
    params(ListJobsOptions),
    responses(
        (status = 200, description = "Page of jobs", body = ApiResponse<JobPage>),
        (status = 502, description = "MediaConvert rejected the request")
    ),
    tag = "Conversions"
)]
pub async fn list_conversions(
    State(state): State<AppState>,
    Query(options): Query<ListJobsOptions>,
) -> impl IntoResponse {
    match ConversionService::list(state, options).await {
        Ok(page) => ApiSuccess(
            ApiResponse::success(page, "Conversion jobs retrieved"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get a conversion job by ID
#[utoipa::path(
    get,
    path = "/api/v1/conversions/{id}",
    params(
        ("id" = String, Path, description = "MediaConvert job ID")
    ),
    responses(
        (status = 200, description = "Job details", body = ApiResponse<JobDetails>),
        (status = 502, description = "MediaConvert rejected the request")
    ),
    tag = "Conversions"
)]
pub async fn get_conversion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match ConversionService::find_by_id(state, &id).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Conversion job retrieved"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Cancel a conversion job
#[utoipa::path(
    delete,
    path = "/api/v1/conversions/{id}",
    params(
        ("id" = String, Path, description = "MediaConvert job ID")
    ),
    responses(
        (status = 200, description = "Job canceled"),
        (status = 502, description = "MediaConvert rejected the request")
    ),
    tag = "Conversions"
)]
pub async fn cancel_conversion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match ConversionService::cancel(state, &id).await {
        Ok(()) => ApiSuccess(
            ApiResponse::success(id, "Conversion job canceled"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
