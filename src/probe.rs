use thiserror::Error;

/// Status and raw body of one completed HTTP exchange. The probe keeps
/// the body as text so failed steps can echo it verbatim.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Connection-level failure: the request never produced an HTTP status.
/// Non-2xx responses are not transport errors; each step decides how to
/// report those.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TransportErrorKind {
    Dns,
    ConnectFailed,
    Timeout,
    Tls,
    Io,
}

impl TransportErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransportErrorKind::Dns => "dns",
            TransportErrorKind::ConnectFailed => "connect_failed",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Tls => "tls",
            TransportErrorKind::Io => "io_error",
        }
    }
}
