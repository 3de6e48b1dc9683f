//! HTTP transport port used to download release schemas.

use crate::domain::AppError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for HTTP GET requests.
///
/// Any response that arrives, whatever its status, is returned as `Ok`.
/// Only `200` bodies are meaningful; other statuses may carry an empty body.
/// `Err` is reserved for transport failures (`AppError::Transport`), such as
/// refused connections, timeouts or a body that cannot be read.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError>;
}
