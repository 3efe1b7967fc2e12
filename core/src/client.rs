//! Stateless request builder and response decoder for the glyph backend.
//!
//! # Design
//! `GlyphClient` holds only a `base_url`, used verbatim: a trailing `/`
//! yields `//` in the request path. Each backend operation is split into a
//! `build_*` method that produces an `HttpRequest` and, for glyph bundles, a
//! `parse_*` method that consumes the response bytes. The caller executes
//! the round-trip in between.

use tracing::{debug, warn};

use crate::codepoints::{encode_codepoints, percent_encode};
use crate::error::DecodeError;
use crate::header::GlyphBundleResponse;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::FontIdentity;
use crate::url::{build_url, ActionKind};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous, stateless client for the glyph backend.
#[derive(Debug, Clone)]
pub struct GlyphClient {
    base_url: String,
}

impl GlyphClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Form-encoded POST asking for the glyphs of `codepoints`.
    pub fn build_glyphs_request(&self, font: &FontIdentity, codepoints: &[u32]) -> HttpRequest {
        let url = build_url(&self.base_url, font, ActionKind::Glyphs);
        let glyphs = percent_encode(&encode_codepoints(codepoints));
        debug!(%url, codepoints = codepoints.len(), "built glyphs request");
        HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(format!("glyphs={glyphs}")),
        }
    }

    /// GET for the base font. Its response is used as-is.
    pub fn build_font_base_request(&self, font: &FontIdentity) -> HttpRequest {
        let url = build_url(&self.base_url, font, ActionKind::Framework);
        debug!(%url, "built font base request");
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_glyphs_response(&self, bytes: Vec<u8>) -> Result<GlyphBundleResponse, DecodeError> {
        GlyphBundleResponse::decode(bytes).inspect_err(|e| warn!(error = %e, "bad glyph bundle"))
    }
}
