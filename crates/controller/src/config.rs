//! Per controller configuration: the service name written into every envelope and the
//! informational list of enabled methods.
//!
//! The config can be built in code:
//!
//! ```
//! use http::Method;
//! use micro_controller::ControllerConfig;
//!
//! let config = ControllerConfig::builder()
//!     .service_name("users")
//!     .enabled_methods([Method::GET, Method::POST])
//!     .build();
//!
//! assert_eq!(config.options_list(), "GET,POST");
//! ```
//!
//! or loaded from TOML, where both keys are optional:
//!
//! ```toml
//! service_name = "users"
//! enabled_methods = ["GET", "POST"]
//! ```

use crate::envelope::Envelope;
use crate::error::ConfigError;
use crate::ControllerError;
use bytes::Bytes;
use http::{Method, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// The service name used when none is configured
pub const DEFAULT_SERVICE_NAME: &str = "Service Name Goes Here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    service_name: String,
    enabled_methods: Vec<Method>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    service_name: Option<String>,
    #[serde(default)]
    enabled_methods: Vec<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { service_name: DEFAULT_SERVICE_NAME.to_owned(), enabled_methods: Vec::new() }
    }
}

impl ControllerConfig {
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::new()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;

        let enabled_methods = raw
            .enabled_methods
            .iter()
            .map(|token| Method::from_bytes(token.as_bytes()).map_err(|e| ConfigError::invalid_method(token, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { service_name: raw.service_name.unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_owned()), enabled_methods })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// The methods this controller advertises. Dispatch never consults this list.
    pub fn enabled_methods(&self) -> &[Method] {
        &self.enabled_methods
    }

    /// the enabled methods joined by `,`, e.g. `GET,POST`
    pub fn options_list(&self) -> String {
        self.enabled_methods.iter().map(Method::as_str).collect::<Vec<_>>().join(",")
    }

    /// Wraps `data` in the envelope and answers `200 OK`
    #[inline]
    pub fn json<T: Serialize + ?Sized>(&self, data: &T) -> Result<Response<Bytes>, ControllerError> {
        self.json_with_status(data, StatusCode::OK)
    }

    pub fn json_with_status<T: Serialize + ?Sized>(
        &self,
        data: &T,
        status: StatusCode,
    ) -> Result<Response<Bytes>, ControllerError> {
        Envelope::new(&self.service_name, data).into_response(status)
    }
}

#[derive(Debug)]
pub struct ControllerConfigBuilder {
    service_name: Option<String>,
    enabled_methods: Vec<Method>,
}

impl ControllerConfigBuilder {
    fn new() -> Self {
        Self { service_name: None, enabled_methods: Vec::new() }
    }

    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn enabled_method(mut self, method: impl Into<Method>) -> Self {
        self.enabled_methods.push(method.into());
        self
    }

    pub fn enabled_methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Method>,
    {
        self.enabled_methods.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ControllerConfig {
        ControllerConfig {
            service_name: self.service_name.unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_owned()),
            enabled_methods: self.enabled_methods,
        }
    }
}
