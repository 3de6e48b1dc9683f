//! HTTP client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::{AppError, SchemaSourceConfig};
use crate::ports::{HttpClient, HttpResponse};

/// Blocking HTTP transport for schema downloads.
///
/// Performs a single request per call. The timeout configured at construction
/// covers connecting, sending and reading the body. Only `200` bodies are read.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a client using the timeout from a schema source configuration.
    pub fn from_config(config: &SchemaSourceConfig) -> Result<Self, AppError> {
        Self::new(Duration::from_secs(config.timeout_secs))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        let transport = |e: reqwest::Error| AppError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status().as_u16();
        // Bodies of non-200 responses are never read; a broken one must not
        // turn an absent schema into a transport failure.
        if status != 200 {
            return Ok(HttpResponse { status, body: Vec::new() });
        }
        let body = response.bytes().map_err(transport)?;

        Ok(HttpResponse { status, body: body.to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::app::VersionSpec;

    fn client() -> ReqwestHttpClient {
        ReqwestHttpClient::new(Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn returns_body_on_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1.11.7/api/openapi-spec/swagger.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"swagger":"2.0"}"#)
            .expect(1)
            .create();

        let url = format!("{}/v1.11.7/api/openapi-spec/swagger.json", server.url());
        let response = client().get(&url).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"swagger":"2.0"}"#);
        mock.assert();
    }

    #[test]
    fn non_success_status_is_not_an_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/missing").with_status(404).with_body("404: Not Found").create();

        let response = client().get(&format!("{}/missing", server.url())).unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_ok());
        mock.assert();
    }

    /// Raw HTTP server: requests for the `v1.11.7` tag get a `404` whose body
    /// is cut short, everything else a complete `200` with body `B2`.
    fn spawn_raw_server(connections: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming().take(connections) {
                let mut stream = stream.unwrap();
                let mut request = [0_u8; 1024];
                let read = stream.read(&mut request).unwrap();
                let request = String::from_utf8_lossy(&request[..read]).to_string();
                let reply = if request.starts_with("GET /v1.11.7/") {
                    "HTTP/1.1 404 Not Found\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort"
                } else {
                    "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nB2"
                };
                stream.write_all(reply.as_bytes()).unwrap();
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn truncated_non_success_body_is_still_a_response() {
        let base = spawn_raw_server(1);

        let response = client().get(&format!("{}/v1.11.7/swagger.json", base)).unwrap();
        assert_eq!(response.status, 404);
        assert!(response.body.is_empty());
    }

    #[test]
    fn truncated_tag_body_still_falls_back_to_release_branch() {
        let base = spawn_raw_server(2);
        let source = SchemaSourceConfig {
            url_template: format!("{}/{{ref}}/swagger.json", base),
            ..Default::default()
        };
        let spec = VersionSpec::new("v1.11.7", Some(Arc::new(client())), source);

        assert_eq!(spec.openapi().unwrap(), b"B2");
    }

    #[test]
    fn server_error_status_is_not_an_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/").with_status(500).create();

        let response = client().get(&server.url()).unwrap();
        assert_eq!(response.status, 500);
    }

    #[test]
    fn connection_failure_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{}/swagger.json", port);
        let err = client().get(&url).unwrap_err();

        match err {
            AppError::Transport { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn from_config_uses_configured_timeout() {
        let config = SchemaSourceConfig { timeout_secs: 3, ..Default::default() };
        assert!(ReqwestHttpClient::from_config(&config).is_ok());
    }
}
