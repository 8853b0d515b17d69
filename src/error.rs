//! Error type for generation and verification.
//!
//! Callers must distinguish "could not check" (an [`Error`]) from "checked,
//! not verified" (`Ok(false)` out of a verifier). Configuration and input
//! errors always precede any network access.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No config was supplied at all.
    #[error("config is missing")]
    MissingConfig,

    /// A required config field is empty after trimming whitespace.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The app name passed to a convenience generator is empty.
    #[error("app name cannot be empty")]
    InvalidAppName,

    /// The domain string does not match the domain-label grammar.
    #[error("invalid domain name")]
    InvalidDomain,

    /// The server answered with a non-200 status code.
    #[error("invalid response status code returned by the server: {0}")]
    InvalidResponse(u16),

    /// The expected value for a file check must be a composite (record-like)
    /// shape, never a scalar.
    #[error("expected value must be a composite type, not a scalar")]
    ScalarExpectedValue,

    /// HTTP transport failure, after the HTTPS -> HTTP fallback is exhausted.
    #[error("http request failed")]
    Http(#[from] reqwest::Error),

    /// DNS transport failure (network error, timeout). A "no such record"
    /// answer is not an error; verifiers report it as `Ok(false)`.
    #[error("dns lookup failed")]
    Dns(#[from] hickory_resolver::error::ResolveError),

    /// The response body is not well-formed JSON for the expected shape.
    #[error("failed to decode json body")]
    JsonDecode(#[source] serde_json::Error),

    /// The response body is not well-formed XML for the expected shape.
    #[error("failed to decode xml body")]
    XmlDecode(#[source] quick_xml::DeError),
}
