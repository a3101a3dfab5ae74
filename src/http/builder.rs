use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::error::AppError;
use crate::state::request_state::HttpMethod;

use super::executor::TransportRequest;

/// Normalize a bare URL into a fully-qualified one.
/// - `:3000/path` → `http://localhost:3000/path`
/// - `localhost/...` → `http://localhost/...`
/// - anything else without a scheme → `https://...`
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return url.to_string();
    }
    if url.starts_with(':') {
        return format!("http://localhost{}", url);
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
        return format!("http://{}", url);
    }
    format!("https://{}", url)
}

pub fn build_request(client: &Client, request: &TransportRequest) -> Result<RequestBuilder, AppError> {
    let method = match request.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    };

    let normalized = normalize_url(&request.url);
    let url = Url::parse(&normalized)
        .map_err(|e| AppError::InvalidUrl(format!("{:?}: {}", request.url, e)))?;
    let mut builder = client.request(method, url);

    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    if !request.body.is_empty() {
        builder = builder.body(request.body.clone());
    }

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> TransportRequest {
        TransportRequest {
            method: HttpMethod::Put,
            url: url.into(),
            body: "payload".into(),
            headers: vec![("X-Test".into(), "42".into())],
        }
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(":3000/a"), "http://localhost:3000/a");
        assert_eq!(normalize_url(" localhost/a "), "http://localhost/a");
        assert_eq!(normalize_url("127.0.0.1:8080"), "http://127.0.0.1:8080");
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_build_request_sets_method_headers_body() {
        let client = Client::new();
        let built = build_request(&client, &request("example.com/x"))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(built.method(), &Method::PUT);
        assert_eq!(built.url().as_str(), "https://example.com/x");
        assert_eq!(built.headers()["x-test"], "42");
        assert_eq!(built.body().and_then(|b| b.as_bytes()), Some(&b"payload"[..]));
    }

    #[test]
    fn test_empty_url_is_invalid() {
        let client = Client::new();
        let err = build_request(&client, &request("   ")).unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_header_fails_on_build() {
        let client = Client::new();
        let mut req = request("http://example.com");
        req.headers.push(("bad header".into(), "v".into()));
        assert!(build_request(&client, &req).unwrap().build().is_err());
    }
}
