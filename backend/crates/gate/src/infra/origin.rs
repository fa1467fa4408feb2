//! Origin Proxy
//!
//! Forwards requests the gate let through to the rendering origin and
//! relays its answer unchanged. Bodies are streamed in both directions, so
//! uploads and material downloads never sit in memory whole.

use axum::body::{Body, HttpBody};
use axum::http::{HeaderMap, Request, header};
use axum::response::Response;
use platform::client::{is_hop_by_hop, join_url};
use std::time::Duration;

use crate::error::{GateError, GateResult};

#[derive(Clone)]
pub struct OriginProxy {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OriginProxy {
    /// `timeout` bounds the wait for the origin's response headers; the body
    /// transfer afterwards is not limited
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    pub async fn forward(&self, req: Request<Body>) -> GateResult<Response> {
        let (parts, body) = req.into_parts();

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = join_url(&self.base_url, path_and_query);

        let mut headers = strip_hop_by_hop(parts.headers);
        // reqwest derives Host from the URL
        headers.remove(header::HOST);

        let mut request = self.client.request(parts.method, url).headers(headers);
        // Bodiless requests stay bodiless instead of turning into chunked ones
        if !body.is_end_stream() {
            request = request.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }
        let send = request.send();

        let upstream = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| GateError::Origin("timed out waiting for response headers".to_string()))?
            .map_err(|e| GateError::Origin(e.to_string()))?;

        let status = upstream.status();
        let response_headers = strip_hop_by_hop(upstream.headers().clone());

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = response_headers;

        Ok(response)
    }
}

fn strip_hop_by_hop(headers: HeaderMap) -> HeaderMap {
    let mut kept = HeaderMap::with_capacity(headers.len());
    let mut current = None;
    for (name, value) in headers {
        if let Some(name) = name {
            current = Some(name);
        }
        if let Some(name) = &current {
            if !is_hop_by_hop(name) {
                kept.append(name.clone(), value);
            }
        }
    }
    kept
}
