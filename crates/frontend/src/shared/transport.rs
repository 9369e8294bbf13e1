//! Outbound POST over `fetch` via gloo-net

use async_trait::async_trait;
use contracts::domain::a003_chat_session::GenerateTransport;
use contracts::shared::errors::TransportError;
use contracts::shared::generate_content::{GenerateContentRequest, RawResponse};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport {
    timeout_ms: Option<u32>,
}

impl GlooTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    async fn post(
        url: &str,
        body: &GenerateContentRequest,
    ) -> Result<RawResponse, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse {
            ok: response.ok(),
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl GenerateTransport for GlooTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> Result<RawResponse, TransportError> {
        let Some(ms) = self.timeout_ms else {
            return Self::post(url, body).await;
        };

        let request = Box::pin(Self::post(url, body));
        let timeout = Box::pin(TimeoutFuture::new(ms));
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("Request timed out after {} ms", ms);
                Err(TransportError::Timeout(ms))
            }
        }
    }
}
