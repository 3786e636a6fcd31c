use std::future::Future;
use std::pin::Pin;

use crate::error::CompletionError;

use super::{CompletionClient, CompletionRequest};

/// Seam between the state machine and the provider; tests plug in fakes.
pub trait CompletionGateway: Send + Sync {
    fn model_name(&self) -> &str;

    fn complete<'a>(
        &'a self,
        request: CompletionRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>>;
}

impl CompletionGateway for CompletionClient {
    fn model_name(&self) -> &str {
        self.model_name()
    }

    fn complete<'a>(
        &'a self,
        request: CompletionRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>> {
        Box::pin(self.complete(request))
    }
}
