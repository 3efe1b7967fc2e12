//! Client core for the glyph-bundle font delivery protocol.
//!
//! # Overview
//! Turns a list of requested code points into a compact request, and decodes
//! the binary header the server puts in front of every glyph bundle. Network
//! I/O is done by an injected `Transport`, or by the host itself through the
//! `build_*` / `parse_*` methods of `GlyphClient`.
//!
//! # Design
//! - `codepoints`, `url` and `header` are pure and synchronous.
//! - `GlyphClient` is stateless; it holds only `base_url`.
//! - `BackendService` is the async capability set; `BundleBackend` is the
//!   implementation that talks to the `/g` and `/t` endpoints.
//! - Transport failures pass through `BackendError::Transport` unchanged.

pub mod backend;
pub mod client;
pub mod codepoints;
pub mod error;
pub mod header;
pub mod http;
pub mod types;
pub mod url;

pub use backend::{BackendService, BundleBackend};
pub use client::GlyphClient;
pub use codepoints::{encode_codepoints, percent_encode};
pub use error::{BackendError, DecodeError, TransportError};
pub use header::{decode_header, BundleVersion, GlyphBundleHeader, GlyphBundleResponse, HEADER_LEN, MAGIC};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::FontIdentity;
pub use url::{build_url, ActionKind};
