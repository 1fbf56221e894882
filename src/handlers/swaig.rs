//! SWAIG webhook endpoint.
//!
//! One endpoint serves both request shapes: signature requests are
//! answered from the registry's advertised metadata, function calls are
//! dispatched to the matching handler and wrapped in the SWAIG response
//! envelope.

use std::sync::Arc;

use axum::extract::{Json, State};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;
use crate::swaig::{FunctionCall, FunctionResult, SwaigRequest};

/// Handler for POST /swaig
///
/// # Errors
/// * 400 Bad Request - no function name, or malformed arguments
/// * 404 Not Found - function name not registered
/// * 500 Internal Server Error - required configuration value unset
#[cfg_attr(
    feature = "openapi",
    utoipa::path(
        post,
        path = "/swaig",
        request_body = SwaigRequest,
        responses(
            (status = 200, description = "Function result envelope or signature list", body = FunctionResult),
            (status = 400, description = "Missing function name or malformed arguments"),
            (status = 404, description = "Unknown function name"),
            (status = 500, description = "Required configuration value unset")
        ),
        security(
            ("bearer_auth" = [])
        ),
        tag = "swaig"
    )
)]
pub async fn swaig_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SwaigRequest>,
) -> AppResult<Json<Value>> {
    if request.is_signature_request() {
        debug!(filter = ?request.functions, "serving signature request");
        let signatures = state.registry.signatures(request.functions.as_deref());
        return Ok(Json(Value::Array(signatures)));
    }

    let name = request
        .function
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("request carries no function name".to_string()))?;
    let call = FunctionCall::from_request(&request)?;

    info!(function = name, "dispatching function call");
    let result = state.registry.dispatch(&state.config, name, &call)?;

    Ok(Json(serde_json::to_value(&result)?))
}
