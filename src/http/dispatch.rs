use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use crate::state::request_state::{HttpMethod, RequestRecord};
use crate::state::response_state::{ResponseState, ResponseView};

use super::executor::{Transport, TransportRequest};

/// Turns a saved request into one transport call and a displayable result.
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn dispatch(&self, record: &RequestRecord) -> ResponseView {
        let Some(method) = HttpMethod::parse(&record.method) else {
            let method = record.method.trim().to_uppercase();
            warn!(%method, "refusing to send unknown method");
            return ResponseView::UnknownMethod(method);
        };

        let request = TransportRequest {
            method,
            url: record.url.clone(),
            body: record.body.clone(),
            headers: record
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };

        let start = Instant::now();
        match self.transport.send(&request) {
            Ok(response) => {
                let elapsed = start.elapsed();
                info!(
                    method = method.as_str(),
                    url = %request.url,
                    status = response.status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "request completed"
                );
                ResponseView::Received(ResponseState {
                    status: response.status,
                    status_text: response.status_text,
                    headers: response.headers,
                    body: response.body,
                    size_bytes: response.size_bytes,
                    elapsed,
                    received_at: Utc::now(),
                })
            }
            Err(e) => {
                warn!(method = method.as_str(), url = %request.url, error = %e, "request failed");
                ResponseView::Failed(e.to_string())
            }
        }
    }
}
