//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `GlyphClient` builds
//! `HttpRequest` values and decodes response bytes without touching the
//! network; a `Transport` (or a C host through the FFI crate) performs the
//! round-trip. Timeouts, retries and cancellation belong to the transport.

use std::future::Future;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Transports that see status codes can use `error_for_status` to turn a
/// failed response into the `TransportError` the backend expects.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn error_for_status(self) -> Result<Vec<u8>, TransportError> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(TransportError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Performs the network round-trip for an `HttpRequest`.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).send(request)
    }
}
