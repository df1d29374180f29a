// Outgoing request mutation
// Every request a view issues has its User-Agent header overwritten before the engine
// sends it, whatever value the caller set.

use http::header::{HeaderValue, USER_AGENT};
use http::Request;

use crate::types::errors::ShellError;

/// Navigation-intercept hook that forces a fixed User-Agent.
#[derive(Debug, Clone)]
pub struct UserAgentOverride {
    value: HeaderValue,
}

impl UserAgentOverride {
    pub fn new(user_agent: &str) -> Result<Self, ShellError> {
        let value = HeaderValue::from_str(user_agent)
            .map_err(|e| ShellError::InvalidHeader(format!("{}: {}", user_agent, e)))?;
        Ok(Self { value })
    }

    /// The header value as text, for engines that take the User-Agent as a string.
    pub fn as_str(&self) -> &str {
        // Constructed from a &str, so always visible ASCII.
        self.value.to_str().unwrap_or_default()
    }

    /// Overwrites the User-Agent of `request`, replacing any value already present.
    pub fn intercept<B>(&self, request: &mut Request<B>) {
        request.headers_mut().insert(USER_AGENT, self.value.clone());
    }
}
