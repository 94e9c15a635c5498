use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sentiment Analyzer API",
        version = "1.0.0",
        description = "Prompt-driven multi-language sentiment analysis over a hosted completion API"
    ),
    paths(
        // Form
        super::analyze::form_page,
        // Sentiment
        super::analyze::analyze,
        // Health
        super::health::health,
        super::health::status,
    ),
    components(schemas(
        // Requests
        crate::models::requests::AnalyzeRequest,
        // Responses
        crate::models::responses::Disposition,
        crate::models::responses::AnalyzeResponse,
        crate::models::responses::ServiceHealth,
        crate::models::responses::HealthResponse,
        crate::models::responses::StatusResponse,
        crate::models::responses::PipelineStatistics,
        // Error
        crate::models::responses::ErrorResponse,
    )),
    tags(
        (name = "Form", description = "The interactive analyzer form"),
        (name = "Sentiment", description = "Sentiment analysis pipeline"),
        (name = "Health", description = "Health and status endpoints"),
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/explore").url("/api-docs/openapi.json", ApiDoc::openapi())
}
