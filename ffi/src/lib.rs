//! C-ABI wrapper around `glyph-core`.
//!
//! # Overview
//! Lets any language with a C FFI build glyph-bundle requests and decode
//! bundle headers while doing the HTTP round-trip itself.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `glyph_build_*` mirror `GlyphClient::build_*` 1:1.
//! - `glyph_decode_header` reads the caller's buffer in place; the glyph
//!   payload is `data + payload_offset`, nothing is copied.
//! - The C caller owns all returned pointers and must release them with the
//!   matching `glyph_free_*` function.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `GlyphClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `glyph_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_client_new(base_url: *const c_char) -> *mut FfiGlyphClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_string_lossy();
        let client = glyph_core::GlyphClient::new(&url);
        Box::into_raw(Box::new(FfiGlyphClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `GlyphClient` created by `glyph_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_client_free(client: *mut FfiGlyphClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the POST for a glyph bundle.
///
/// `codepoints` may be null when `codepoints_len` is 0. Returns null on a
/// null client, null font, or panic.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_build_glyphs_request(
    client: *const FfiGlyphClient,
    font: *const FfiFontIdentity,
    codepoints: *const u32,
    codepoints_len: usize,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || font.is_null() {
            return std::ptr::null_mut();
        }
        if codepoints.is_null() && codepoints_len > 0 {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let font = unsafe { &*font }.to_core();
        let codepoints: &[u32] = if codepoints_len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(codepoints, codepoints_len) }
        };
        let req = client.inner.build_glyphs_request(&font, codepoints);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the GET for a font base. Returns null on null input or panic.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_build_font_base_request(
    client: *const FfiGlyphClient,
    font: *const FfiFontIdentity,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || font.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let font = unsafe { &*font }.to_core();
        let req = client.inner.build_font_base_request(&font);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode the header of a glyph-bundle response.
///
/// `data` is only borrowed for the duration of the call.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_decode_header(data: *const u8, len: usize) -> *mut FfiHeaderResult {
    catch_unwind(|| {
        if data.is_null() && len > 0 {
            return FfiHeaderResult::null_arg("data");
        }
        let bytes: &[u8] = if len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(data, len) }
        };
        match glyph_core::decode_header(bytes) {
            Ok(header) => FfiHeaderResult::ok(header),
            Err(e) => FfiHeaderResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiHeaderResult::panic("panic in glyph_decode_header"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `glyph_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiHeaderResult` returned by `glyph_decode_header`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn glyph_free_result(result: *mut FfiHeaderResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if !result.header.is_null() {
            let header = unsafe { Box::from_raw(result.header) };
            free_c_string(header.signature);
        }
    });
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
