//! OpenAPI specification and documentation
//!
//! This module provides OpenAPI/Swagger documentation for the switchboard
//! API. It is only compiled when the `openapi` feature is enabled.

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::swaig::{FunctionResult, SwaigArgument, SwaigRequest};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Switchboard API",
        version = "0.1.0",
        description = "SWAIG webhook service mapping agent intents to SWML call-transfer and SMS documents"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development")
    ),
    paths(
        crate::handlers::api::health_check,
        crate::handlers::swaig::swaig_handler,
    ),
    components(schemas(
        SwaigRequest,
        SwaigArgument,
        FunctionResult,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "swaig", description = "SWAIG function dispatch and signature advertising")
    )
)]
pub struct ApiDoc;

/// Security scheme configuration
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            let mut http = utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            );
            http.description = Some(
                "Static API secret. Required when AUTH_REQUIRED is enabled.".to_string(),
            );

            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(http),
            )
        }
    }
}

/// Create OpenAPI documentation routes
///
/// Routes:
/// - `GET /docs/openapi.json` - OpenAPI spec as JSON
/// - `GET /docs/openapi.yaml` - OpenAPI spec as YAML
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/docs/openapi.json", get(openapi_json_handler))
        .route("/docs/openapi.yaml", get(openapi_yaml_handler))
}

/// Handler for GET /docs/openapi.json
async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Handler for GET /docs/openapi.yaml
async fn openapi_yaml_handler() -> ([(axum::http::header::HeaderName, &'static str); 1], String) {
    let yaml = spec_yaml().unwrap_or_else(|e| format!("Error generating YAML: {}", e));
    ([(axum::http::header::CONTENT_TYPE, "application/yaml")], yaml)
}

/// Get OpenAPI spec as YAML string
///
/// This is used for the CLI export command
pub fn spec_yaml() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&ApiDoc::openapi())
}

/// Get OpenAPI spec as JSON string
pub fn spec_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}
