//! Routes a request to the verb method of a [`Controller`].

use crate::{Controller, ControllerError, ControllerResult, Verb};
use http::Request;
use tracing::{debug, warn};

/// Calls the [`Controller`] method matching the request verb and returns its result unchanged.
///
/// Request methods outside [`Verb`] fail with a `405` [`ControllerError`] whose message is
/// `Invalid method`. Errors from the verb method are propagated as they are.
pub async fn dispatch<C, ReqBody>(controller: &C, req: Request<ReqBody>) -> ControllerResult
where
    C: Controller<ReqBody> + ?Sized,
    ReqBody: Send + 'static,
{
    let Some(verb) = Verb::from_method(req.method()) else {
        warn!(method = %req.method(), uri = %req.uri(), "no controller method for request method");
        return Err(ControllerError::invalid_method());
    };

    debug!(%verb, uri = %req.uri(), "dispatching request");

    match verb {
        Verb::Get => controller.get(req).await,
        Verb::Post => controller.post(req).await,
        Verb::Put => controller.put(req).await,
        Verb::Patch => controller.patch(req).await,
        Verb::Delete => controller.delete(req).await,
        Verb::Options => controller.options(req).await,
    }
}
