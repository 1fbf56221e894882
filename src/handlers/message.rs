//! Outbound SMS function.
//!
//! Builds a `send_sms` SWML document from the caller-supplied destination
//! and body. The destination is expected in E.164 format but deliberately
//! not validated here; the telephony platform owns delivery. Session
//! metadata is not echoed by this function (the platform needs no state
//! for a fire-and-forget send).

use serde_json::json;
use tracing::info;

use crate::config::ServerConfig;
use crate::errors::app_error::{AppError, AppResult};
use crate::swaig::{ArgumentSpec, FunctionCall, FunctionResult, FunctionSpec};
use crate::swml;

const MESSAGE_INSTRUCTION: &str = "Message has been sent.";

/// Registry entry for the send_message function.
pub fn spec() -> FunctionSpec {
    FunctionSpec {
        name: "send_message",
        purpose: "Send message",
        arguments: vec![
            ArgumentSpec {
                name: "to",
                kind: "string",
                description: "Phone number to send the message to in e.164 format. eg +1234567890",
                required: true,
            },
            ArgumentSpec {
                name: "message",
                kind: "string",
                description: "Message content to send",
                required: true,
            },
        ],
        handler: handle,
    }
}

/// Handle a send_message function call.
pub fn handle(config: &ServerConfig, call: &FunctionCall) -> AppResult<FunctionResult> {
    let to = call.require_str("to")?;
    let message = call.require_str("message")?;

    let from_number = config.from_number.as_deref().ok_or_else(|| {
        AppError::Unconfigured("no SMS origin number configured (FROM_NUMBER is not set)".into())
    })?;

    let mut document = swml::Document::new();
    document.add_application(
        swml::MAIN_SECTION,
        "send_sms",
        json!({
            "to_number": to,
            "from_number": from_number,
            "body": message,
        }),
    );

    info!(to, "sending SMS");

    Ok(FunctionResult {
        response: MESSAGE_INSTRUCTION.to_string(),
        action: vec![json!({ "SWML": document.render()? })],
    })
}
