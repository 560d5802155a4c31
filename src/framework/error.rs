//! # Errors
//!
//! Two layers, mirroring the two sides of the facade:
//!
//! - [`CallError`] comes out of a [`Caller`](crate::framework::Caller). Its
//!   `Display` output is the textual message the appliance sent back.
//! - [`ClientError`] is what every public operation returns. Transport
//!   failures pass through verbatim; encode/decode failures carry the step
//!   that failed and keep the `serde_json` cause reachable via `source()`.
//!
//! Turning an error into "nothing there" happens only in
//! [`absent_if_not_found`], and only single-resource direct lookups call it.

use crate::framework::version::VersionParseError;
use std::fmt::Display;

/// Substring the appliance puts in human-readable not-found messages.
pub const NOT_FOUND_PHRASE: &str = "does not exist";

/// POSIX-style code the appliance puts in not-found messages.
pub const NOT_FOUND_ERRNO: &str = "[ENOENT]";

/// Failure reported by the capability layer.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The appliance rejected the call; the message is passed through as-is.
    #[error("{0}")]
    Remote(String),
    #[error("connection closed")]
    Closed,
    #[error("call cancelled")]
    Cancelled,
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors returned by resource clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Call(#[from] CallError),

    #[error("failed to encode {context}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {context}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A write succeeded but the follow-up fetch found nothing.
    #[error("{kind} {id} missing after write")]
    MissingAfterWrite { kind: &'static str, id: String },

    #[error(transparent)]
    Version(#[from] VersionParseError),
}

impl ClientError {
    pub(crate) fn encode(context: impl Into<String>, source: serde_json::Error) -> Self {
        ClientError::Encode {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        ClientError::Decode {
            context: context.into(),
            source,
        }
    }

    /// The underlying transport error, if this is one.
    pub fn as_call(&self) -> Option<&CallError> {
        match self {
            ClientError::Call(e) => Some(e),
            _ => None,
        }
    }
}

/// True iff `err` is present and its message carries either not-found marker.
pub fn is_not_found<E: Display + ?Sized>(err: Option<&E>) -> bool {
    match err {
        None => false,
        Some(e) => {
            let message = e.to_string();
            message.contains(NOT_FOUND_PHRASE) || message.contains(NOT_FOUND_ERRNO)
        }
    }
}

/// Converts a classified not-found failure into `Ok(None)`.
///
/// Every other error is returned unchanged.
pub fn absent_if_not_found<T>(result: Result<T, CallError>) -> Result<Option<T>, CallError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_not_found(Some(&e)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_is_not_found_classification() {
        assert!(!is_not_found::<CallError>(None));
        assert!(is_not_found(Some(&CallError::Remote(
            "[EINVAL] vm.get_instance: VM 7 does not exist".into()
        ))));
        assert!(is_not_found(Some(&CallError::Remote(
            "[ENOENT] None: Dataset tank/gone not found".into()
        ))));
        assert!(is_not_found(Some(&CallError::Remote(
            "[ENOENT] cronjob 3 does not exist".into()
        ))));
        assert!(!is_not_found(Some(&CallError::Remote(
            "[EPERM] Not authorized".into()
        ))));
        assert!(!is_not_found(Some(&CallError::Closed)));
    }

    #[test]
    fn test_classifier_reads_transport_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "object does not exist");
        assert!(is_not_found(Some(&CallError::Transport(Box::new(io)))));
    }

    #[test]
    fn test_absent_if_not_found() {
        let absent: Result<Option<u32>, _> =
            absent_if_not_found(Err(CallError::Remote("[ENOENT] gone".into())));
        assert!(matches!(absent, Ok(None)));

        let present = absent_if_not_found(Ok::<_, CallError>(5));
        assert!(matches!(present, Ok(Some(5))));

        let failed: Result<Option<u32>, _> =
            absent_if_not_found(Err(CallError::Remote("[EFAULT] boom".into())));
        assert!(matches!(failed, Err(CallError::Remote(m)) if m == "[EFAULT] boom"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ClientError::decode("user list", source);
        assert_eq!(err.to_string(), "failed to decode user list");
        assert!(err.source().is_some());
        assert!(err.as_call().is_none());
    }
}
