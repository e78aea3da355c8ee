//! Verb dispatching controllers with a uniform JSON envelope
//!
//! A controller is a type implementing [`Controller`]. Every HTTP verb it may receive has a
//! default method: GET, POST, PUT, PATCH and DELETE fail with a `405 Method Not Allowed`
//! [`ControllerError`], while OPTIONS answers `200` with the `"success"` payload. A concrete
//! controller overrides only the verbs it supports.
//!
//! [`dispatch()`] maps the request method onto the matching verb method, and
//! [`ControllerHandler`] adapts a controller into a [`Handler`] that a server or router can
//! invoke, turning errors into wire responses.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Method, Request, StatusCode};
//! use micro_controller::{dispatch, Controller, ControllerConfig, ControllerResult};
//!
//! struct Users {
//!     config: ControllerConfig,
//! }
//!
//! #[async_trait::async_trait]
//! impl Controller for Users {
//!     fn config(&self) -> &ControllerConfig {
//!         &self.config
//!     }
//!
//!     async fn get(&self, _req: Request<Bytes>) -> ControllerResult {
//!         self.config.json(&serde_json::json!({ "id": 1 }))
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let users = Users { config: ControllerConfig::builder().service_name("users").build() };
//!
//! let get = Request::builder().method(Method::GET).body(Bytes::new()).unwrap();
//! let response = dispatch(&users, get).await.unwrap();
//! assert_eq!(response.status(), StatusCode::OK);
//!
//! let delete = Request::builder().method(Method::DELETE).body(Bytes::new()).unwrap();
//! let error = dispatch(&users, delete).await.unwrap_err();
//! assert_eq!(error.status(), StatusCode::METHOD_NOT_ALLOWED);
//! # });
//! ```
//!
//! # Architecture
//!
//! - [`verb`]: the closed set of dispatchable verbs
//! - [`controller`]: the [`Controller`] trait and its default verb methods
//! - [`dispatch`](mod@dispatch): the verb dispatch table
//! - [`envelope`]: the `{meta, payload}` JSON body
//! - [`config`]: service name and enabled methods
//! - [`handler`]: the host-facing seam and error translation
//! - [`error`]: [`ControllerError`] and [`ConfigError`]

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod verb;

pub use config::ControllerConfig;
pub use config::ControllerConfigBuilder;
pub use config::DEFAULT_SERVICE_NAME;
pub use controller::Controller;
pub use controller::ControllerResult;
pub use dispatch::dispatch;
pub use envelope::Envelope;
pub use envelope::Meta;
pub use error::ConfigError;
pub use error::ControllerError;
pub use handler::controller_handler;
pub use handler::ControllerHandler;
pub use handler::Handler;
pub use verb::Verb;
