//! Asynchronous backend operations on top of an injected `Transport`.
//!
//! # Design
//! `BackendService` is the capability set callers program against.
//! `BundleBackend` implements it by pairing a `GlyphClient` with a
//! `Transport`; the only suspension point is the transport call, and the
//! codec, URL builder and header decoder stay synchronous.

use std::future::Future;

use tracing::debug;

use crate::client::GlyphClient;
use crate::error::BackendError;
use crate::header::GlyphBundleResponse;
use crate::http::Transport;
use crate::types::FontIdentity;

/// Operations every glyph backend provides.
pub trait BackendService {
    /// Fetch the glyph bundle for `codepoints`.
    fn request_glyphs(
        &self,
        font: &FontIdentity,
        codepoints: &[u32],
    ) -> impl Future<Output = Result<GlyphBundleResponse, BackendError>> + Send;

    /// Fetch the base font bytes, unparsed.
    fn request_font_base(
        &self,
        font: &FontIdentity,
    ) -> impl Future<Output = Result<Vec<u8>, BackendError>> + Send;

    /// Report a client-side message to the backend.
    fn log(&self, message: &str) -> impl Future<Output = Result<Vec<u8>, BackendError>> + Send;
}

/// Backend speaking the `/g/...glyphs` and `/t/...framework` protocol.
#[derive(Debug, Clone)]
pub struct BundleBackend<T> {
    client: GlyphClient,
    transport: T,
}

impl<T: Transport> BundleBackend<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: GlyphClient::new(base_url),
            transport,
        }
    }
}

impl<T: Transport + Sync> BackendService for BundleBackend<T> {
    async fn request_glyphs(
        &self,
        font: &FontIdentity,
        codepoints: &[u32],
    ) -> Result<GlyphBundleResponse, BackendError> {
        let request = self.client.build_glyphs_request(font, codepoints);
        let bytes = self.transport.send(request).await?;
        debug!(len = bytes.len(), "received glyph bundle");
        Ok(self.client.parse_glyphs_response(bytes)?)
    }

    async fn request_font_base(&self, font: &FontIdentity) -> Result<Vec<u8>, BackendError> {
        let request = self.client.build_font_base_request(font);
        Ok(self.transport.send(request).await?)
    }

    // This backend has no logging endpoint.
    async fn log(&self, message: &str) -> Result<Vec<u8>, BackendError> {
        debug!(dropped = message, "backend has no log endpoint");
        Ok(Vec::new())
    }
}
