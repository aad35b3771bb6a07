/*!
Unicode encodings, and conversion to and from everything else.

The functions here take a complete sequence of UTF-16 or UTF-32 units and produce UTF-8.  Decoding is done by the `Utf16Scalars` and `Utf32Scalars` iterators, encoding by `utf8::push_scalar`.
*/
use crate::error::Result;
use self::utf8::Utf8Push;
use self::utf16::Utf16Scalars;
use self::utf32::Utf32Scalars;

pub mod conv;
pub mod utf8;
pub mod utf16;
pub mod utf32;

/// Converts a UTF-16 sequence to UTF-8.
pub fn utf8_from_utf16(utf16: &[u16]) -> Result<Vec<u8>> {
    // Every unit encodes to at most three bytes; pairs take four bytes for two units.
    let mut utf8 = Vec::with_capacity(utf16.len() * 3);
    for scalar in Utf16Scalars::new(utf16.iter().cloned()) {
        utf8.push_scalar(scalar?)?;
    }
    Ok(utf8)
}

/// Converts a UTF-32 sequence to UTF-8.
pub fn utf8_from_utf32(utf32: &[u32]) -> Result<Vec<u8>> {
    let mut utf8 = Vec::with_capacity(utf32.len());
    for scalar in Utf32Scalars::new(utf32.iter().cloned()) {
        utf8.push_scalar(scalar?)?;
    }
    Ok(utf8)
}

/// Converts a single scalar value to UTF-8.
pub fn utf8_from_scalar(scalar: u32) -> Result<Vec<u8>> {
    let mut utf8 = Vec::with_capacity(4);
    utf8.push_scalar(scalar)?;
    Ok(utf8)
}
