use reqwest::Client;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::error::AppError;
use crate::state::request_state::HttpMethod;

use super::builder::build_request;
use super::client::build_client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub size_bytes: usize,
}

/// Issues one HTTP call and blocks until it completes or fails.
pub trait Transport {
    fn send(&self, request: &TransportRequest) -> Result<TransportResponse, AppError>;
}

/// `reqwest` driven on a private current-thread runtime, so the caller
/// stays synchronous.
pub struct ReqwestTransport {
    client: Client,
    runtime: Runtime,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let client = {
            let _guard = runtime.enter();
            build_client()?
        };
        Ok(Self { client, runtime })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &TransportRequest) -> Result<TransportResponse, AppError> {
        self.runtime.block_on(do_execute(&self.client, request))
    }
}

async fn do_execute(client: &Client, state: &TransportRequest) -> Result<TransportResponse, AppError> {
    let builder = build_request(client, state)?;
    let request = builder.build()?;
    debug!(method = %request.method(), url = %request.url(), "sending request");
    let response = client.execute(request).await?;

    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("").to_string();

    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect();

    let bytes = response.bytes().await?;

    Ok(TransportResponse {
        status: status.as_u16(),
        status_text,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
        size_bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_send_against_mock_server() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/items"))
                .and(header("x-test", "42"))
                .and(body_string("hello"))
                .respond_with(
                    ResponseTemplate::new(201)
                        .append_header("x-reply", "one")
                        .append_header("x-reply", "two")
                        .set_body_string("created\nok"),
                )
                .mount(&server),
        );

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .send(&TransportRequest {
                method: HttpMethod::Post,
                url: format!("{}/items", server.uri()),
                body: "hello".into(),
                headers: vec![("X-Test".into(), "42".into())],
            })
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.status_text, "Created");
        assert_eq!(response.body, "created\nok");
        assert_eq!(response.size_bytes, 10);
        let replies: Vec<&str> = response
            .headers
            .iter()
            .filter(|(k, _)| k == "x-reply")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(replies, ["one", "two"]);
    }

    #[test]
    fn test_connection_failure_is_an_error() {
        let transport = ReqwestTransport::new().unwrap();
        let result = transport.send(&TransportRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/".into(),
            body: String::new(),
            headers: Vec::new(),
        });
        assert!(matches!(result, Err(AppError::Http(_))));
    }
}
