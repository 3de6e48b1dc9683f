use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{HttpClient, HttpResponse};

#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    ConnectionRefused,
}

/// Scripted `HttpClient` that records every requested URL.
///
/// URLs without a scripted reply answer with `404`.
#[derive(Debug, Clone, Default)]
pub struct FakeHttpClient {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.replies.lock().unwrap().insert(url.into(), Reply::Response(HttpResponse::new(status, body)));
        self
    }

    pub fn refuse(self, url: impl Into<String>) -> Self {
        self.replies.lock().unwrap().insert(url.into(), Reply::ConnectionRefused);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for FakeHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.lock().unwrap().get(url) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::ConnectionRefused) => Err(AppError::Transport {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Ok(HttpResponse::new(404, "404: Not Found")),
        }
    }
}
