//! Blocking HTTP transport backed by ureq.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

/// Executes requests with ureq. 4xx/5xx responses come back as data so the
/// core decides what they mean.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = req.url.as_str();
        let content_type = req
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map_or("application/json", |(_, value)| value.as_str());

        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(url).call(),
            (HttpMethod::Post, Some(body)) => {
                self.agent.post(url).content_type(content_type).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(url).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                self.agent.patch(url).content_type(content_type).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => self.agent.patch(url).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(method = req.method.as_str(), url, status, "received response");
        Ok(HttpResponse::new(status, body))
    }
}
