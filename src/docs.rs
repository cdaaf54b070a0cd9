use crate::modules::conversion::client::{JobDetails, JobPage};
use crate::modules::conversion::dto::CreateConversionRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::conversion::handler::create_conversion,
        crate::modules::conversion::handler::list_conversions,
        crate::modules::conversion::handler::get_conversion,
        crate::modules::conversion::handler::cancel_conversion,
        crate::modules::webhook::handler::media_convert,
    ),
    components(
        schemas(CreateConversionRequest, JobDetails, JobPage)
    ),
    tags(
        (name = "Conversions", description = "MediaConvert job control"),
        (name = "Webhooks", description = "SNS job status notifications")
    )
)]
pub struct ApiDoc;
