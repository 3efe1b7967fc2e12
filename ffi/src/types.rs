//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible fields: `*mut c_char`
//! instead of `String`, raw pointer plus length instead of `Vec`, and enums
//! with explicit discriminants. Conversions live here so `lib.rs` only holds
//! the `extern "C"` surface.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use glyph_core::{DecodeError, FontIdentity, GlyphBundleHeader, HttpMethod};

/// Opaque handle to a `GlyphClient`.
pub struct FfiGlyphClient {
    pub(crate) inner: glyph_core::GlyphClient,
}

/// Copy a C string into a Rust string. Null reads as empty, invalid UTF-8
/// is replaced.
fn read_c_str<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
}

/// Build a C string, dropping interior NULs rather than failing.
fn to_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Font identity (caller-provided)
// ---------------------------------------------------------------------------

/// Font identity as borrowed C strings. `family_path` may be null.
#[repr(C)]
pub struct FfiFontIdentity {
    pub family_path: *const c_char,
    pub family_name: *const c_char,
    pub version: *const c_char,
    pub font_kit: *const c_char,
}

impl FfiFontIdentity {
    pub(crate) fn to_core(&self) -> FontIdentity {
        FontIdentity {
            family_path: (!self.family_path.is_null())
                .then(|| read_c_str(self.family_path).into_owned()),
            family_name: read_c_str(self.family_name).into_owned(),
            version: read_c_str(self.version).into_owned(),
            font_kit: read_c_str(self.font_kit).into_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `glyph_build_*` functions. The C caller executes it and hands
/// the response bytes of a glyphs request to `glyph_decode_header`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: glyph_core::HttpRequest) -> *mut Self {
        let url = to_c_string(req.url);
        let body = match req.body {
            Some(b) => to_c_string(b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiHeaderResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidMagicNumber = 1,
    TruncatedHeader = 2,
    Panic = 3,
    NullArg = 4,
}

/// Decoded glyph-bundle header. The payload starts `payload_offset` bytes
/// into the buffer the caller passed in.
#[repr(C)]
pub struct FfiGlyphBundleHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub signature: *mut c_char,
    pub glyph_count: u16,
    pub flags: u16,
    pub payload_offset: usize,
}

/// Result envelope for header decoding.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `header`
/// points to the decoded header. On failure `header` is null.
#[repr(C)]
pub struct FfiHeaderResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub header: *mut FfiGlyphBundleHeader,
}

impl FfiHeaderResult {
    pub(crate) fn ok(header: GlyphBundleHeader) -> *mut Self {
        let ffi_header = Box::new(FfiGlyphBundleHeader {
            version_major: header.version.major,
            version_minor: header.version.minor,
            signature: to_c_string(header.signature),
            glyph_count: header.glyph_count,
            flags: header.flags,
            payload_offset: header.offset,
        });
        Box::into_raw(Box::new(FfiHeaderResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            header: Box::into_raw(ffi_header),
        }))
    }

    pub(crate) fn from_error(err: DecodeError) -> *mut Self {
        let error_code = match err {
            DecodeError::InvalidMagicNumber { .. } => FfiErrorCode::InvalidMagicNumber,
            DecodeError::TruncatedHeader { .. } => FfiErrorCode::TruncatedHeader,
        };
        Self::failure(error_code, err.to_string())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiHeaderResult {
            error_code,
            error_message: to_c_string(msg),
            header: std::ptr::null_mut(),
        }))
    }
}
