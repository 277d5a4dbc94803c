//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{guests, health, recap};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guestbook API",
        version = "0.1.0",
        description = "Guest book intake and visit recap API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Guests
        guests::submit_guest,
        // Recap
        recap::visit_recap,
    ),
    components(
        schemas(
            crate::models::SubmitGuestRequest,
            crate::models::SubmitGuestResponse,
            crate::models::RecapResult,
            crate::models::RecapQuery,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "guests", description = "Guest book submissions"),
        (name = "recap", description = "Visit statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
