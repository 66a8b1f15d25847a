use crate::probe::{TransportError, TransportErrorKind};
use curl::Error as CurlError;

pub(super) fn map_curl_error(err: &CurlError) -> TransportError {
    let message = err.to_string();

    let kind = if err.is_couldnt_resolve_host() || err.is_couldnt_resolve_proxy() {
        TransportErrorKind::Dns
    } else if err.is_operation_timedout() {
        TransportErrorKind::Timeout
    } else if err.is_couldnt_connect() {
        TransportErrorKind::ConnectFailed
    } else if err.is_ssl_connect_error()
        || err.is_ssl_cacert()
        || err.is_ssl_certproblem()
        || err.is_ssl_cipher()
    {
        TransportErrorKind::Tls
    } else {
        TransportErrorKind::Io
    };

    TransportError { kind, message }
}
