//! Call transfer function.
//!
//! Translates a "transfer me to billing" intent into an SWML document the
//! telephony platform executes, plus guidance text for the conversational
//! agent. The department directory is resolved at startup, so the handler
//! only decides between the `sip_refer` and `connect` applications.

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::config::{Department, Destination, ServerConfig};
use crate::errors::app_error::{AppError, AppResult};
use crate::swaig::{ArgumentSpec, FunctionCall, FunctionResult, FunctionSpec};
use crate::swml;

const TRANSFER_INSTRUCTION: &str = "Tell the user you are going to transfer the call to whoever \
     they asked for. Do not change languages from the one you are currently using. Do not hangup.";

/// Registry entry for the transfer function.
pub fn spec() -> FunctionSpec {
    FunctionSpec {
        name: "transfer",
        purpose: "Transfer call",
        arguments: vec![ArgumentSpec {
            name: "target",
            kind: "string",
            description: "the target to transfer the user to (sales, support, billing, general)",
            required: true,
        }],
        handler: handle,
    }
}

/// Handle a transfer function call.
///
/// An unknown department is a conversational miss answered with an apology
/// and an empty directive list, not an error. A known department whose
/// destination was never configured fails the request.
pub fn handle(config: &ServerConfig, call: &FunctionCall) -> AppResult<FunctionResult> {
    let target = call.require_str("target")?;

    let Some(department) = Department::from_name(target) else {
        warn!(requested = target, "transfer requested for unknown department");
        return Ok(FunctionResult {
            response: format!(
                "Sorry, there is no department by that name: {target}. \
                 Please ask for sales, support, billing, or general inquiries."
            ),
            action: vec![],
        });
    };

    let destination = config.departments.destination(department).ok_or_else(|| {
        AppError::Unconfigured(format!(
            "department '{department}' has no destination configured ({} is not set)",
            department.env_var()
        ))
    })?;

    let mut document = swml::Document::new();
    match destination {
        Destination::Sip(uri) => {
            document.add_application(swml::MAIN_SECTION, "sip_refer", json!({ "to_uri": uri }));
        }
        Destination::Pstn(number) => {
            document.add_application(swml::MAIN_SECTION, "connect", json!({ "to": number }));
        }
    }

    info!(
        department = %department,
        destination = destination.as_str(),
        "transferring call"
    );

    Ok(FunctionResult {
        response: TRANSFER_INSTRUCTION.to_string(),
        action: vec![json!({
            "set_meta_data": call.meta_data.clone().unwrap_or(Value::Null),
            "SWML": document.render()?,
            "transfer": "true",
        })],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepartmentDirectory;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            departments: DepartmentDirectory {
                sales: Some(Destination::Sip("sip:sales@pbx.example.com".to_string())),
                support: Some(Destination::Pstn("+15551230001".to_string())),
                billing: None,
                general: Some(Destination::Sip("sip:desk@pbx.example.com".to_string())),
            },
            from_number: Some("+15557654321".to_string()),
            auth_api_secret: None,
            auth_required: false,
        }
    }

    fn call_with_target(target: &str) -> FunctionCall {
        let mut call = FunctionCall::default();
        call.arguments
            .insert("target".to_string(), json!(target));
        call
    }

    fn rendered_swml(result: &FunctionResult) -> Value {
        let swml_text = result.action[0]["SWML"].as_str().unwrap();
        serde_json::from_str(swml_text).unwrap()
    }

    #[test]
    fn test_sip_destination_renders_sip_refer() {
        let result = handle(&test_config(), &call_with_target("sales")).unwrap();

        assert_eq!(result.response, TRANSFER_INSTRUCTION);
        assert_eq!(result.action.len(), 1);
        assert_eq!(result.action[0]["transfer"], "true");

        let swml = rendered_swml(&result);
        assert_eq!(
            swml["sections"]["main"],
            json!([{"sip_refer": {"to_uri": "sip:sales@pbx.example.com"}}])
        );
    }

    #[test]
    fn test_pstn_destination_renders_connect() {
        let result = handle(&test_config(), &call_with_target("support")).unwrap();

        let swml = rendered_swml(&result);
        assert_eq!(
            swml["sections"]["main"],
            json!([{"connect": {"to": "+15551230001"}}])
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = handle(&test_config(), &call_with_target("sales")).unwrap();
        let mixed = handle(&test_config(), &call_with_target("Sales")).unwrap();
        let upper = handle(&test_config(), &call_with_target("SALES")).unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_unknown_department_apologizes() {
        let result = handle(&test_config(), &call_with_target("accounting")).unwrap();

        assert!(result.response.contains("no department by that name: accounting"));
        assert!(result.response.contains("sales, support, billing, or general"));
        assert!(result.action.is_empty());
    }

    #[test]
    fn test_trailing_whitespace_is_unknown() {
        let result = handle(&test_config(), &call_with_target("billing ")).unwrap();
        assert!(result.action.is_empty());
        assert!(result.response.contains("billing "));
    }

    #[test]
    fn test_unconfigured_department_fails_request() {
        let result = handle(&test_config(), &call_with_target("billing"));
        assert!(matches!(result, Err(AppError::Unconfigured(_))));
    }

    #[test]
    fn test_missing_target_is_bad_request() {
        let result = handle(&test_config(), &FunctionCall::default());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_meta_data_echoed_verbatim() {
        let mut call = call_with_target("sales");
        call.meta_data = Some(json!({"k": "v"}));

        let result = handle(&test_config(), &call).unwrap();
        assert_eq!(result.action[0]["set_meta_data"], json!({"k": "v"}));
    }

    #[test]
    fn test_absent_meta_data_is_null() {
        let result = handle(&test_config(), &call_with_target("sales")).unwrap();
        assert_eq!(result.action[0]["set_meta_data"], Value::Null);
    }

    #[test]
    fn test_idempotent_output() {
        let mut call = call_with_target("general");
        call.meta_data = Some(json!({"call_id": "abc"}));

        let first = handle(&test_config(), &call).unwrap();
        let second = handle(&test_config(), &call).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
