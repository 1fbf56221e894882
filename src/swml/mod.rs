//! SWML document builder.
//!
//! SWML is the provider-defined call/message-control markup: a version
//! string plus named sections, each an ordered list of "applications"
//! (an application name mapped to its parameters). Handlers assemble a
//! document with [`Document::add_application`] and hand the rendered JSON
//! text to the telephony platform inside a response directive; nothing in
//! this crate inspects rendered output.
//!
//! Rendered shape:
//!
//! ```json
//! {"version":"1.0.0","sections":{"main":[{"sip_refer":{"to_uri":"sip:..."}}]}}
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::{Map, Value};

/// SWML version emitted by this service.
pub const VERSION: &str = "1.0.0";

/// The default document section.
pub const MAIN_SECTION: &str = "main";

/// One application entry: a name plus its parameter map.
///
/// Serializes as a single-key object, `{"<name>": {params}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    name: String,
    params: Map<String, Value>,
}

impl Serialize for Application {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.params)?;
        map.end()
    }
}

/// An SWML document under construction.
///
/// Applications within a section keep insertion order; the platform
/// executes them sequentially.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    version: String,
    sections: BTreeMap<String, Vec<Application>>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            version: VERSION.to_string(),
            sections: BTreeMap::new(),
        }
    }

    /// Append an application to a section, creating the section on first
    /// use.
    ///
    /// `params` must be a JSON object; any other value is ignored with a
    /// warning rather than corrupting the document.
    pub fn add_application(&mut self, section: &str, name: &str, params: Value) {
        let Value::Object(params) = params else {
            tracing::warn!(
                application = name,
                "ignoring application with non-object parameters"
            );
            return;
        };
        self.sections
            .entry(section.to_string())
            .or_default()
            .push(Application {
                name: name.to_string(),
                params,
            });
    }

    /// Render the document to its JSON text form.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}
