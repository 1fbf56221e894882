//! Function registry and dispatcher.
//!
//! An explicit registry built once at startup: each entry maps a function
//! name to its handler plus the argument metadata advertised to the
//! calling agent. The metadata is advertising only; runtime validation is
//! the handler's responsibility.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::config::ServerConfig;
use crate::errors::app_error::{AppError, AppResult};

use super::types::{FunctionCall, FunctionResult};

/// Handler function signature.
///
/// Handlers are plain synchronous functions: the whole request cycle is
/// lookup and string assembly, nothing blocks.
pub type HandlerFn = fn(&ServerConfig, &FunctionCall) -> AppResult<FunctionResult>;

/// A declared argument, used to advertise the function's signature.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A registered function: identity, advertised purpose and arguments, and
/// the handler invoked at dispatch.
pub struct FunctionSpec {
    pub name: &'static str,
    pub purpose: &'static str,
    pub arguments: Vec<ArgumentSpec>,
    pub handler: HandlerFn,
}

impl FunctionSpec {
    /// The SWAIG signature object advertised for this function.
    fn signature(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for argument in &self.arguments {
            properties.insert(
                argument.name.to_string(),
                json!({
                    "type": argument.kind,
                    "description": argument.description,
                }),
            );
            if argument.required {
                required.push(Value::String(argument.name.to_string()));
            }
        }

        json!({
            "function": self.name,
            "purpose": self.purpose,
            "argument": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        })
    }
}

/// Registry of SWAIG functions, keyed by name.
#[derive(Default)]
pub struct SwaigRegistry {
    functions: BTreeMap<&'static str, FunctionSpec>,
}

impl SwaigRegistry {
    pub fn new() -> Self {
        SwaigRegistry::default()
    }

    /// Register a function. Re-registering a name replaces the previous
    /// entry.
    pub fn register(&mut self, spec: FunctionSpec) {
        self.functions.insert(spec.name, spec);
    }

    /// Invoke the named function's handler.
    ///
    /// An unregistered name is a client error, never a crash.
    pub fn dispatch(
        &self,
        config: &ServerConfig,
        name: &str,
        call: &FunctionCall,
    ) -> AppResult<FunctionResult> {
        let spec = self
            .functions
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("no function registered as '{name}'")))?;
        (spec.handler)(config, call)
    }

    /// Signature objects for advertised functions.
    ///
    /// With a filter, only the named functions are returned; unknown names
    /// are silently omitted.
    pub fn signatures(&self, filter: Option<&[String]>) -> Vec<Value> {
        self.functions
            .values()
            .filter(|spec| match filter {
                Some(names) if !names.is_empty() => {
                    names.iter().any(|n| n.as_str() == spec.name)
                }
                _ => true,
            })
            .map(FunctionSpec::signature)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
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
            departments: DepartmentDirectory::default(),
            from_number: None,
            auth_api_secret: None,
            auth_required: false,
        }
    }

    fn echo_handler(_config: &ServerConfig, _call: &FunctionCall) -> AppResult<FunctionResult> {
        Ok(FunctionResult {
            response: "ok".to_string(),
            action: vec![],
        })
    }

    fn registry_with_echo() -> SwaigRegistry {
        let mut registry = SwaigRegistry::new();
        registry.register(FunctionSpec {
            name: "echo",
            purpose: "Echo test function",
            arguments: vec![ArgumentSpec {
                name: "text",
                kind: "string",
                description: "Text to echo",
                required: true,
            }],
            handler: echo_handler,
        });
        registry
    }

    #[test]
    fn test_dispatch_known_function() {
        let registry = registry_with_echo();
        let result = registry
            .dispatch(&test_config(), "echo", &FunctionCall::default())
            .unwrap();
        assert_eq!(result.response, "ok");
    }

    #[test]
    fn test_dispatch_unknown_function_is_not_found() {
        let registry = registry_with_echo();
        let result = registry.dispatch(&test_config(), "missing", &FunctionCall::default());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_signature_shape() {
        let registry = registry_with_echo();
        let signatures = registry.signatures(None);
        assert_eq!(signatures.len(), 1);

        let signature = &signatures[0];
        assert_eq!(signature["function"], "echo");
        assert_eq!(signature["purpose"], "Echo test function");
        assert_eq!(signature["argument"]["type"], "object");
        assert_eq!(signature["argument"]["properties"]["text"]["type"], "string");
        assert_eq!(signature["argument"]["required"][0], "text");
    }

    #[test]
    fn test_signatures_filter() {
        let registry = registry_with_echo();

        let filtered = registry.signatures(Some(&["echo".to_string()]));
        assert_eq!(filtered.len(), 1);

        let filtered = registry.signatures(Some(&["unknown".to_string()]));
        assert!(filtered.is_empty());

        // Empty filter means all functions
        let filtered = registry.signatures(Some(&[]));
        assert_eq!(filtered.len(), 1);
    }
}
