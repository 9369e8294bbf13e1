use crate::shared::errors::TransportError;
use crate::shared::generate_content::{GenerateContentRequest, RawResponse};
use async_trait::async_trait;

/// Issues the single POST of a send. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait GenerateTransport {
    /// POST `body` as JSON to `url`; any HTTP status is an `Ok` response
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> Result<RawResponse, TransportError>;
}
