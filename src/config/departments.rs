//! Department directory and destination address types.
//!
//! Transfer targets are configured per department through `TRANSFER_*`
//! environment variables. Addresses are parsed into a tagged [`Destination`]
//! once at load time, so request handling never has to sniff string
//! prefixes: a value is either a SIP endpoint or an E.164 phone number, or
//! the configuration is rejected before the server starts.

use std::env;
use std::fmt;

/// A call-routing category the agent can transfer a caller to.
///
/// The set is closed: lookups for anything else are a conversational
/// miss, not an error. Name matching is case-insensitive and does not
/// trim whitespace (`"billing "` is unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Sales,
    Support,
    Billing,
    General,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Sales,
        Department::Support,
        Department::Billing,
        Department::General,
    ];

    /// Resolve a department from a caller-supplied name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Sales => "sales",
            Department::Support => "support",
            Department::Billing => "billing",
            Department::General => "general",
        }
    }

    /// The environment variable carrying this department's destination.
    pub fn env_var(&self) -> &'static str {
        match self {
            Department::Sales => "TRANSFER_SALES",
            Department::Support => "TRANSFER_SUPPORT",
            Department::Billing => "TRANSFER_BILLING",
            Department::General => "TRANSFER_GENERAL",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a configured destination address has an
/// unrecognized shape.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("destination address is empty")]
    Empty,

    #[error("SIP destination '{0}' has no URI after the 'sip:' scheme")]
    EmptySipUri(String),

    #[error("phone destination '{0}' must be '+' followed by digits only")]
    InvalidPhoneNumber(String),

    #[error("destination '{0}' is neither a sip: URI nor a +E.164 number")]
    UnrecognizedFormat(String),
}

/// A parsed transfer destination.
///
/// The variant decides which SWML application a transfer renders to:
/// `Sip` becomes a `sip_refer`, `Pstn` becomes a `connect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A SIP endpoint, e.g. `sip:support@pbx.example.com`.
    Sip(String),
    /// An E.164 phone number, e.g. `+15551234567`.
    Pstn(String),
}

impl Destination {
    /// Parse a raw configured address.
    ///
    /// Accepted shapes:
    /// - `sip:` followed by a non-empty URI remainder
    /// - `+` followed by one or more ASCII digits
    pub fn parse(raw: &str) -> Result<Self, DestinationError> {
        if raw.is_empty() {
            return Err(DestinationError::Empty);
        }
        if let Some(uri) = raw.strip_prefix("sip:") {
            if uri.is_empty() {
                return Err(DestinationError::EmptySipUri(raw.to_string()));
            }
            return Ok(Destination::Sip(raw.to_string()));
        }
        if let Some(digits) = raw.strip_prefix('+') {
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(DestinationError::InvalidPhoneNumber(raw.to_string()));
            }
            return Ok(Destination::Pstn(raw.to_string()));
        }
        Err(DestinationError::UnrecognizedFormat(raw.to_string()))
    }

    /// The address as originally configured.
    pub fn as_str(&self) -> &str {
        match self {
            Destination::Sip(uri) => uri,
            Destination::Pstn(number) => number,
        }
    }
}

/// Immutable mapping from department to its configured destination.
///
/// Populated once at startup and never mutated. A department may be
/// unconfigured; requests for it fail individually rather than blocking
/// startup, since a deployment may staff only some departments.
#[derive(Debug, Clone, Default)]
pub struct DepartmentDirectory {
    pub sales: Option<Destination>,
    pub support: Option<Destination>,
    pub billing: Option<Destination>,
    pub general: Option<Destination>,
}

impl DepartmentDirectory {
    /// Load the directory from `TRANSFER_*` environment variables.
    ///
    /// Unset or empty-string variables leave the department unconfigured.
    /// A set value that parses as neither `sip:` nor `+E.164` is a startup
    /// error: a typo in live configuration should never reach traffic.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let mut directory = DepartmentDirectory::default();
        for department in Department::ALL {
            let raw = env::var(department.env_var())
                .ok()
                .filter(|v| !v.is_empty());
            let destination = match raw {
                Some(value) => Some(
                    Destination::parse(&value)
                        .map_err(|e| format!("{}: {e}", department.env_var()))?,
                ),
                None => None,
            };
            *directory.slot_mut(department) = destination;
        }
        Ok(directory)
    }

    /// Look up the configured destination for a department.
    pub fn destination(&self, department: Department) -> Option<&Destination> {
        match department {
            Department::Sales => self.sales.as_ref(),
            Department::Support => self.support.as_ref(),
            Department::Billing => self.billing.as_ref(),
            Department::General => self.general.as_ref(),
        }
    }

    fn slot_mut(&mut self, department: Department) -> &mut Option<Destination> {
        match department {
            Department::Sales => &mut self.sales,
            Department::Support => &mut self.support,
            Department::Billing => &mut self.billing,
            Department::General => &mut self.general,
        }
    }
}
