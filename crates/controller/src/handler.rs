//! The seam between controllers and whatever server or router hosts them.
//!
//! A host only knows [`Handler`]: a request goes in, a response comes out. [`ControllerHandler`]
//! implements it for any [`Controller`] by running [`dispatch()`] and turning a
//! [`ControllerError`] into an enveloped error response, so the host never sees the error.

use crate::{dispatch, Controller, ControllerError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderValue, Request, Response, StatusCode};
use http_body::Body;
use http_body_util::Full;
use std::convert::Infallible;
use std::error::Error;
use tracing::{debug, error};

#[async_trait]
pub trait Handler<ReqBody>: Send + Sync {
    type RespBody: Body;
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error>;
}

/// a [`Handler`] that answers every request through a [`Controller`]
#[derive(Debug)]
pub struct ControllerHandler<C> {
    controller: C,
}

impl<C> ControllerHandler<C> {
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_inner(self) -> C {
        self.controller
    }
}

pub fn controller_handler<C>(controller: C) -> ControllerHandler<C> {
    ControllerHandler::new(controller)
}

#[async_trait]
impl<C, ReqBody> Handler<ReqBody> for ControllerHandler<C>
where
    C: Controller<ReqBody>,
    ReqBody: Send + 'static,
{
    type RespBody = Full<Bytes>;
    type Error = Infallible;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        let response = match dispatch(&self.controller, req).await {
            Ok(response) => response,
            Err(e) => error_response::<C, ReqBody>(&self.controller, &e),
        };

        Ok(response.map(Full::new))
    }
}

/// Renders `e` as an enveloped response. A `405` also advertises the controller's enabled methods
/// in the `Allow` header, unless there are none.
fn error_response<C, ReqBody>(controller: &C, e: &ControllerError) -> Response<Bytes>
where
    C: Controller<ReqBody> + ?Sized,
    ReqBody: Send + 'static,
{
    let status = e.status();
    if status.is_server_error() {
        error!(%status, cause = %e, "controller failed to answer request");
    } else {
        debug!(%status, cause = %e, "controller rejected request");
    }

    let mut response = e.to_response(controller.config());

    if status == StatusCode::METHOD_NOT_ALLOWED {
        let options_list = controller.options_list();
        if !options_list.is_empty() {
            match HeaderValue::from_str(&options_list) {
                Ok(allow) => {
                    response.headers_mut().insert(http::header::ALLOW, allow);
                }
                Err(invalid) => {
                    error!(cause = %invalid, %options_list, "enabled methods are not a valid allow header");
                }
            }
        }
    }

    response
}
