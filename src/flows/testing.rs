//! Scripted transport for exercising probe sequences without a backend.

use crate::api::{ApiRequest, Method, Transport};
use crate::config::SecretString;
use crate::probe::{HttpResponse, TransportError, TransportErrorKind};
use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

/// Replays a fixed script of responses in order and records every
/// request the flow issues.
pub(crate) struct ScriptedTransport {
    script: VecDeque<Result<HttpResponse, TransportError>>,
    pub log: Vec<RecordedRequest>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            script: script.into(),
            log: Vec::new(),
        }
    }

    pub fn created_group_posts(&self) -> usize {
        self.log
            .iter()
            .filter(|request| request.method == Method::Post && request.path == "/api/groups")
            .count()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&mut self, request: &ApiRequest) -> Result<HttpResponse, TransportError> {
        self.log.push(RecordedRequest {
            method: request.method,
            path: request.url.path().to_string(),
            bearer: request
                .bearer
                .as_ref()
                .map(|token| SecretString::expose(token).to_string()),
            body: request.body.clone(),
        });
        self.script
            .pop_front()
            .expect("probe issued more requests than scripted")
    }
}

pub(crate) fn ok(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}

pub(crate) fn refused() -> Result<HttpResponse, TransportError> {
    Err(TransportError {
        kind: TransportErrorKind::ConnectFailed,
        message: "Connection refused".to_string(),
    })
}
