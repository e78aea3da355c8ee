//! The `{meta, payload}` body every JSON response is wrapped in.
//!
//! ```json
//! {"meta":{"ServiceName":"users"},"payload":{"id":1}}
//! ```

use crate::ControllerError;
use bytes::Bytes;
use http::{HeaderValue, Response, StatusCode};
use serde::Serialize;

/// Describes the service that produced a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta<'a> {
    #[serde(rename = "ServiceName")]
    pub service_name: &'a str,
}

/// A payload wrapped together with the service [`Meta`].
///
/// Field order is part of the wire format: `meta` is always written before `payload`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub meta: Meta<'a>,
    pub payload: &'a T,
}

impl<'a, T: Serialize + ?Sized> Envelope<'a, T> {
    pub fn new(service_name: &'a str, payload: &'a T) -> Self {
        Self { meta: Meta { service_name }, payload }
    }

    pub fn to_bytes(&self) -> Result<Bytes, ControllerError> {
        serde_json::to_vec(self).map(Bytes::from).map_err(ControllerError::serialize)
    }

    /// Serializes the envelope into a `application/json` response with the given status
    pub fn into_response(self, status: StatusCode) -> Result<Response<Bytes>, ControllerError> {
        let body = self.to_bytes()?;

        let mut response = Response::new(body);
        *response.status_mut() = status;
        response.headers_mut().insert(http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(response)
    }
}
