//! Wire types for the SWAIG webhook.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::app_error::{AppError, AppResult};

/// Request body for the SWAIG webhook.
///
/// Two request shapes share the endpoint:
/// - a function call: `function` set, arguments under `argument`
/// - a signature request: `action` set to `"get_signature"`, with an
///   optional `functions` filter
///
/// Unknown fields are ignored; the platform sends more session context
/// than this service consumes.
///
/// # Example
/// ```json
/// {
///   "function": "transfer",
///   "argument": { "parsed": [{ "target": "sales" }] },
///   "meta_data_token": "abc123",
///   "meta_data": { "caller": "+15550001111" }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SwaigRequest {
    /// Name of the function to invoke.
    #[cfg_attr(feature = "openapi", schema(example = "transfer"))]
    pub function: Option<String>,

    /// Special request kind; only `"get_signature"` is recognized.
    #[cfg_attr(feature = "openapi", schema(example = "get_signature"))]
    pub action: Option<String>,

    /// For signature requests, limit the response to these functions.
    pub functions: Option<Vec<String>>,

    /// Function arguments as delivered by the platform.
    pub argument: Option<SwaigArgument>,

    /// Opaque session token, passed through untouched.
    pub meta_data_token: Option<String>,

    /// Opaque session metadata, passed through untouched.
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub meta_data: Option<Value>,
}

impl SwaigRequest {
    pub fn is_signature_request(&self) -> bool {
        self.action.as_deref() == Some("get_signature")
    }
}

/// Argument container: the platform sends both a parsed object list and
/// the raw JSON text it was parsed from.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SwaigArgument {
    /// Parsed argument objects; the first entry carries the call's
    /// arguments.
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub parsed: Option<Vec<Map<String, Value>>>,

    /// Raw JSON text fallback.
    pub raw: Option<String>,
}

/// A function call normalized for handler consumption: the argument map
/// plus the opaque session metadata to round-trip.
#[derive(Debug, Default, Clone)]
pub struct FunctionCall {
    pub arguments: Map<String, Value>,
    pub meta_data_token: Option<String>,
    pub meta_data: Option<Value>,
}

impl FunctionCall {
    /// Extract the call from a webhook request.
    ///
    /// Arguments come from `argument.parsed[0]`, falling back to parsing
    /// `argument.raw`; a request with neither carries no arguments.
    pub fn from_request(request: &SwaigRequest) -> AppResult<Self> {
        let arguments = match &request.argument {
            Some(argument) => {
                if let Some(parsed) = argument.parsed.as_ref().and_then(|p| p.first()) {
                    parsed.clone()
                } else if let Some(raw) = argument.raw.as_deref() {
                    serde_json::from_str::<Map<String, Value>>(raw).map_err(|e| {
                        AppError::BadRequest(format!("malformed raw argument payload: {e}"))
                    })?
                } else {
                    Map::new()
                }
            }
            None => Map::new(),
        };

        Ok(FunctionCall {
            arguments,
            meta_data_token: request.meta_data_token.clone(),
            meta_data: request.meta_data.clone(),
        })
    }

    /// Fetch a required string argument.
    pub fn require_str(&self, name: &str) -> AppResult<&str> {
        match self.arguments.get(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(AppError::BadRequest(format!(
                "argument '{name}' must be a string"
            ))),
            None => Err(AppError::BadRequest(format!(
                "missing required argument: {name}"
            ))),
        }
    }
}

/// A handler's result: the instruction text for the agent and the list of
/// side-effect directives for the platform.
///
/// Serializes as the SWAIG response envelope:
/// `{"response": "...", "action": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FunctionResult {
    /// Natural-language instruction for the conversational agent.
    #[cfg_attr(feature = "openapi", schema(example = "Message has been sent."))]
    pub response: String,

    /// Structured directives (SWML documents, metadata, signals).
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub action: Vec<Value>,
}
