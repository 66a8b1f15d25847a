use super::helpers::map_curl_error;
use crate::api::{ApiRequest, Method, Transport};
use crate::probe::{HttpResponse, TransportError};
use curl::Error as CurlError;
use curl::easy::{Easy2, Handler, List, WriteError};
use std::mem;
use std::time::Duration;

#[derive(Default)]
struct BodyBuffer {
    bytes: Vec<u8>,
}

impl BodyBuffer {
    fn clear(&mut self) {
        self.bytes.clear();
    }

    fn take(&mut self) -> Vec<u8> {
        mem::take(&mut self.bytes)
    }
}

impl Handler for BodyBuffer {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.bytes.extend_from_slice(data);
        Ok(data.len())
    }
}

/// Blocking curl-backed transport. One `Easy2` handle is reused for
/// every call of a probe, so connections stay warm across the sequence.
pub struct CurlTransport {
    easy: Easy2<BodyBuffer>,
    timeout_total: Duration,
}

impl CurlTransport {
    pub fn new(timeout_total: Duration) -> Result<Self, CurlError> {
        let mut easy = Easy2::new(BodyBuffer::default());
        easy.follow_location(false)?;
        easy.accept_encoding("")?;
        Ok(Self {
            easy,
            timeout_total,
        })
    }

    fn configure(&mut self, request: &ApiRequest) -> Result<(), CurlError> {
        self.easy.reset();
        self.easy.get_mut().clear();
        self.easy.follow_location(false)?;
        self.easy.accept_encoding("")?;
        self.easy.url(request.url.as_str())?;
        self.easy.timeout(self.timeout_total)?;

        match request.method {
            Method::Get => self.easy.get(true)?,
            Method::Post => {
                self.easy.post(true)?;
                let body = request.body.as_deref().unwrap_or("");
                self.easy.post_fields_copy(body.as_bytes())?;
            }
        }

        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;
        headers.append("Accept: application/json")?;
        if let Some(token) = &request.bearer {
            headers.append(&format!("Authorization: Bearer {}", token.expose()))?;
        }
        self.easy.http_headers(headers)?;

        Ok(())
    }
}

impl Transport for CurlTransport {
    fn execute(&mut self, request: &ApiRequest) -> Result<HttpResponse, TransportError> {
        self.configure(request).map_err(|err| map_curl_error(&err))?;
        self.easy.perform().map_err(|err| map_curl_error(&err))?;

        let status = self
            .easy
            .response_code()
            .map_err(|err| map_curl_error(&err))? as u16;
        let body = String::from_utf8_lossy(&self.easy.get_mut().take()).into_owned();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests;
