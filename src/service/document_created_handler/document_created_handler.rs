use super::HandlerOutcome;
use crate::{dto::input, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCreatedHandler: Send + Sync {
    ///
    /// Reacts to a single created document.
    /// Invocations are independent, the same event may be delivered more than once.
    ///
    /// ### Errors
    /// Any error means the invocation failed and the caller decides about retrying it.
    ///
    async fn handle(&self, event: input::DocumentCreated) -> Result<HandlerOutcome, Error>;
}
