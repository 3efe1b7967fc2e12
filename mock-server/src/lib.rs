//! In-memory glyph-bundle server used by integration tests.
//!
//! Speaks the same wire protocol as the production backend but defines its
//! own types, so a drift between client and server shows up as a failing
//! test rather than a shared bug.

use axum::{
    extract::{Form, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, info};

pub const MAGIC: &[u8; 4] = b"BSAC";
pub const VERSION: (u8, u8) = (1, 0);
pub const SIGNATURE: [u8; 20] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0xa0, 0xb1, 0xc2, 0xd3,
];

/// Font kit for which the server answers with a bad magic number.
pub const CORRUPT_KIT: &str = "corrupt";

#[derive(Debug, Deserialize)]
pub struct GlyphsForm {
    pub glyphs: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/g/{family}/{version}/{file}", post(glyphs))
        .route("/t/{family}/{version}/{file}", get(framework))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), "glyph server running");
    axum::serve(listener, app()).await
}

/// Expand a compressed glyph list: each leading `-` stands for one U+002D.
pub fn expand_glyphs(compressed: &str) -> Vec<u32> {
    let rest = compressed.trim_start_matches('-');
    let dashes = compressed.len() - rest.len();
    std::iter::repeat(u32::from('-'))
        .take(dashes)
        .chain(rest.chars().map(u32::from))
        .collect()
}

/// Header followed by one big-endian `u32` per requested code point.
pub fn bundle(codepoints: &[u32]) -> Vec<u8> {
    let count = u16::try_from(codepoints.len()).unwrap_or(u16::MAX);
    let mut out = Vec::with_capacity(32 + codepoints.len() * 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&[VERSION.0, VERSION.1, 0, 0]);
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&count.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    for cp in codepoints {
        out.extend_from_slice(&cp.to_be_bytes());
    }
    out
}

async fn glyphs(
    Path((family, version, file)): Path<(String, String, String)>,
    Form(form): Form<GlyphsForm>,
) -> Result<impl IntoResponse, StatusCode> {
    let kit = file.strip_suffix(".glyphs").ok_or(StatusCode::NOT_FOUND)?;
    debug!(%family, %version, kit, glyphs = %form.glyphs, "glyphs request");
    let body = if kit == CORRUPT_KIT {
        b"<html>not a bundle</html>".to_vec()
    } else {
        bundle(&expand_glyphs(&form.glyphs))
    };
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], body))
}

async fn framework(
    Path((family, version, file)): Path<(String, String, String)>,
) -> Result<Vec<u8>, StatusCode> {
    let kit = file.strip_suffix(".framework").ok_or(StatusCode::NOT_FOUND)?;
    debug!(%family, %version, kit, "framework request");
    Ok(format!("framework:{family}/{version}/{kit}").into_bytes())
}
