//! Configuration validation logic.
//!
//! Runs at load time, after all values are read. Anything that passes here
//! is safe to serve traffic with; per-request failures are limited to
//! departments or the origin number being left unconfigured.

/// Validate that when auth is required, an API secret is configured.
pub fn validate_auth_required(
    auth_required: bool,
    auth_api_secret: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if auth_required && auth_api_secret.is_none() {
        return Err(
            "AUTH_REQUIRED is enabled but AUTH_API_SECRET is not set. \
             Configure AUTH_API_SECRET or disable AUTH_REQUIRED."
                .into(),
        );
    }
    Ok(())
}

/// Validate the outbound SMS origin number when one is configured.
///
/// `FROM_NUMBER` must be E.164-shaped (`+` followed by digits). Leaving it
/// unset is allowed; the send_message function then fails per request.
pub fn validate_from_number(
    from_number: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(number) = from_number {
        let digits = number
            .strip_prefix('+')
            .ok_or_else(|| format!("FROM_NUMBER '{number}' must start with '+'"))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(
                format!("FROM_NUMBER '{number}' must be '+' followed by digits only").into(),
            );
        }
    }
    Ok(())
}
