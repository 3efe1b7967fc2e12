//! Decoder for the fixed 32-byte header that prefixes every glyph bundle.
//!
//! # Layout
//! All multi-byte integers are big-endian.
//!
//! | offset | size | field         |
//! |--------|------|---------------|
//! | 0      | 4    | magic `BSAC`  |
//! | 4      | 1    | version major |
//! | 5      | 1    | version minor |
//! | 6      | 2    | reserved      |
//! | 8      | 20   | signature     |
//! | 28     | 2    | glyph count   |
//! | 30     | 2    | flags         |
//!
//! The glyph payload starts at offset 32 and is opaque to this crate.

use std::fmt;

use crate::error::DecodeError;

pub const MAGIC: &[u8; 4] = b"BSAC";
pub const HEADER_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 20;

/// Bundle format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleVersion {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for BundleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Decoded glyph-bundle header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBundleHeader {
    pub version: BundleVersion,
    /// Font signature as 40 lowercase hex digits.
    pub signature: String,
    pub glyph_count: u16,
    pub flags: u16,
    /// Offset at which the glyph payload begins. Always `HEADER_LEN`.
    pub offset: usize,
}

/// A decoded bundle: the header plus the untouched source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBundleResponse {
    header: GlyphBundleHeader,
    data: Vec<u8>,
}

impl GlyphBundleResponse {
    /// Decode the header of `data` and take ownership of the buffer.
    pub fn decode(data: Vec<u8>) -> Result<Self, DecodeError> {
        let header = decode_header(&data)?;
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &GlyphBundleHeader {
        &self.header
    }

    pub fn payload_offset(&self) -> usize {
        self.header.offset
    }

    /// Glyph data following the header.
    pub fn payload(&self) -> &[u8] {
        &self.data[self.header.offset..]
    }

    /// The full response, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Forward-only cursor over the header bytes.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.pos + N;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(DecodeError::TruncatedHeader {
                needed: end,
                available: self.buf.len(),
            })?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.read_array::<2>().map(u16::from_be_bytes)
    }
}

/// Parse the bundle header at the start of `bytes`.
///
/// The magic number is checked before anything else is read, so a short
/// buffer with the wrong tag reports `InvalidMagicNumber`.
pub fn decode_header(bytes: &[u8]) -> Result<GlyphBundleHeader, DecodeError> {
    let mut reader = Reader::new(bytes);

    let magic = reader.read_array::<4>()?;
    if &magic != MAGIC {
        return Err(DecodeError::InvalidMagicNumber { found: magic });
    }

    let major = reader.read_u8()?;
    let minor = reader.read_u8()?;
    reader.read_array::<2>()?; // reserved

    let signature = hex(&reader.read_array::<SIGNATURE_LEN>()?);
    let glyph_count = reader.read_u16()?;
    let flags = reader.read_u16()?;

    Ok(GlyphBundleHeader {
        version: BundleVersion { major, minor },
        signature,
        glyph_count,
        flags,
        offset: reader.pos,
    })
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
