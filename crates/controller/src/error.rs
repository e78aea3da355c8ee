use crate::{ControllerConfig, Verb};
use bytes::Bytes;
use http::{Response, StatusCode};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Error raised by a controller while answering a request.
///
/// [`dispatch`](crate::dispatch()) never catches it. The host, usually through
/// [`ControllerHandler`](crate::ControllerHandler), turns it into a response using
/// [`status`](ControllerError::status) and [`message`](ControllerError::message).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("{message}")]
    MethodNotAllowed { message: Cow<'static, str> },

    #[error("{message}")]
    Status { status: StatusCode, message: Cow<'static, str> },

    /// the response payload could not be written as json, answered with a `500`
    #[error("failed to serialize json payload: {source}")]
    Serialize { source: serde_json::Error },

    /// the request body is not the json the controller expects, answered with a `400`
    #[error("invalid json request body: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },
}

impl ControllerError {
    pub fn method_not_allowed<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self::MethodNotAllowed { message: message.into() }
    }

    /// the request method has no verb method at all
    pub fn invalid_method() -> Self {
        Self::method_not_allowed("Invalid method")
    }

    /// the verb method was not overridden by the controller
    pub fn not_implemented(verb: Verb) -> Self {
        Self::method_not_allowed(format!("{} method not allowed or not implemented", verb.title()))
    }

    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    pub fn with_status<S: Into<Cow<'static, str>>>(status: StatusCode, message: S) -> Self {
        Self::Status { status, message: message.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Status { status, .. } => *status,
            Self::Serialize { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::MethodNotAllowed { message } | Self::Status { message, .. } => Cow::Borrowed(message.as_ref()),
            Self::Serialize { .. } => Cow::Borrowed("Internal server error"),
            Self::InvalidJson { .. } => Cow::Owned(self.to_string()),
        }
    }

    #[inline]
    pub fn is_method_not_allowed(&self) -> bool {
        matches!(self, Self::MethodNotAllowed { .. })
    }

    /// Renders the error as an envelope whose payload is `{"status": .., "message": ..}`.
    pub fn to_response(&self, config: &ControllerConfig) -> Response<Bytes> {
        let status = self.status();
        let message = self.message();
        let payload = ErrorPayload { status: status.as_u16(), message: &message };

        match config.json_with_status(&payload, status) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(cause = %e, "failed to render controller error, fallback to an empty body");
                let mut response = Response::new(Bytes::new());
                *response.status_mut() = status;
                response
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    status: u16,
    message: &'a str,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid controller config: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("invalid http method in enabled_methods: {token:?}")]
    InvalidMethod {
        token: String,
        #[source]
        source: http::method::InvalidMethod,
    },
}

impl ConfigError {
    pub fn invalid_method<S: ToString>(token: S, source: http::method::InvalidMethod) -> Self {
        Self::InvalidMethod { token: token.to_string(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::ControllerError;
    use crate::{ControllerConfig, Verb};
    use http::StatusCode;
    use serde_json::Value;
    use std::collections::HashMap;

    #[test]
    fn test_not_implemented_messages() {
        let expected = [
            (Verb::Get, "Get method not allowed or not implemented"),
            (Verb::Post, "Post method not allowed or not implemented"),
            (Verb::Put, "Put method not allowed or not implemented"),
            (Verb::Patch, "Patch method not allowed or not implemented"),
            (Verb::Delete, "Delete method not allowed or not implemented"),
        ];

        for (verb, message) in expected {
            let error = ControllerError::not_implemented(verb);
            assert!(error.is_method_not_allowed());
            assert_eq!(error.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(error.message(), message);
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn test_with_status() {
        let error = ControllerError::with_status(StatusCode::NOT_FOUND, "user 7 not found");
        assert!(!error.is_method_not_allowed());
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "user 7 not found");
    }

    #[test]
    fn test_serialize_error_is_internal() {
        let mut payload = HashMap::new();
        payload.insert((1, 2), "tuple keys are not json keys");
        let source = serde_json::to_vec(&payload).unwrap_err();

        let error = ControllerError::serialize(source);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().starts_with("failed to serialize json payload"));
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_malformed_request_json_is_bad_request() {
        fn parse(body: &[u8]) -> Result<Value, ControllerError> {
            Ok(serde_json::from_slice(body)?)
        }

        let error = parse(b"{oops").unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert!(error.message().starts_with("invalid json request body"));
    }

    #[test]
    fn test_internal_error_response_hides_detail() {
        let source = serde_json::to_vec(&HashMap::from([((1, 2), 3)])).unwrap_err();
        let response = ControllerError::serialize(source).to_response(&ControllerConfig::default());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            &response.body()[..],
            br#"{"meta":{"ServiceName":"Service Name Goes Here"},"payload":{"status":500,"message":"Internal server error"}}"#
        );
    }

    #[test]
    fn test_to_response() {
        let config = ControllerConfig::builder().service_name("users").build();
        let response = ControllerError::invalid_method().to_response(&config);

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            &response.body()[..],
            br#"{"meta":{"ServiceName":"users"},"payload":{"status":405,"message":"Invalid method"}}"#
        );
    }

    #[test]
    fn test_to_response_keeps_custom_status() {
        let response = ControllerError::with_status(StatusCode::CONFLICT, "version mismatch")
            .to_response(&ControllerConfig::default());

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            &response.body()[..],
            br#"{"meta":{"ServiceName":"Service Name Goes Here"},"payload":{"status":409,"message":"version mismatch"}}"#
        );
    }
}
