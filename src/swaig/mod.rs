//! SWAIG function-call protocol support.
//!
//! SWAIG is the calling convention the conversational agent platform uses
//! to invoke server-side functions: a single webhook receives JSON bodies
//! naming a function and its arguments, and the server answers with a
//! natural-language instruction plus a list of structured side-effect
//! directives. The same webhook also answers signature requests
//! (`action: "get_signature"`) advertising the registered functions to the
//! agent.
//!
//! - `types` - wire types for requests, normalized calls, and results
//! - `registry` - the function registry and dispatcher

pub mod registry;
pub mod types;

pub use registry::{ArgumentSpec, FunctionSpec, SwaigRegistry};
pub use types::{FunctionCall, FunctionResult, SwaigArgument, SwaigRequest};
