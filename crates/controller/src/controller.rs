use crate::{ControllerConfig, ControllerError, Verb};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};

pub type ControllerResult = Result<Response<Bytes>, ControllerError>;

/// A request handler with one method per HTTP verb.
///
/// Implementors override the verbs they support and leave the rest to the defaults:
///
/// - `get`, `post`, `put`, `patch` and `delete` fail with [`ControllerError::not_implemented`]
/// - `options` answers `200 OK` with the `"success"` payload
///
/// Requests reach these methods through [`dispatch`](crate::dispatch()), which picks the method
/// from the request verb. `ReqBody` is the request body type and defaults to a fully read
/// [`Bytes`] body.
#[async_trait]
pub trait Controller<ReqBody = Bytes>: Send + Sync
where
    ReqBody: Send + 'static,
{
    /// The service name and enabled methods of this controller
    fn config(&self) -> &ControllerConfig;

    async fn get(&self, _req: Request<ReqBody>) -> ControllerResult {
        Err(ControllerError::not_implemented(Verb::Get))
    }

    async fn post(&self, _req: Request<ReqBody>) -> ControllerResult {
        Err(ControllerError::not_implemented(Verb::Post))
    }

    async fn put(&self, _req: Request<ReqBody>) -> ControllerResult {
        Err(ControllerError::not_implemented(Verb::Put))
    }

    async fn patch(&self, _req: Request<ReqBody>) -> ControllerResult {
        Err(ControllerError::not_implemented(Verb::Patch))
    }

    async fn delete(&self, _req: Request<ReqBody>) -> ControllerResult {
        Err(ControllerError::not_implemented(Verb::Delete))
    }

    /// Answers preflight probes. The enabled methods are not consulted.
    async fn options(&self, _req: Request<ReqBody>) -> ControllerResult {
        self.config().json("success")
    }

    /// the enabled methods joined by `,`
    fn options_list(&self) -> String {
        self.config().options_list()
    }
}
