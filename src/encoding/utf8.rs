/*!
Encoding scalar values as UTF-8.
*/
use crate::error::{Error, Result};

/// The largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

#[inline]
fn is_surrogate(scalar: u32) -> bool {
    0xD800 <= scalar && scalar <= 0xDFFF
}

/// Continuation byte carrying the low six bits of `bits`.
#[inline]
fn body(bits: u32) -> u8 {
    ((bits & 0b0011_1111) | 0b1000_0000) as u8
}

/**
Returns the number of bytes `scalar` occupies in UTF-8, or `None` if it is not a scalar value.
*/
pub fn encoded_len(scalar: u32) -> Option<usize> {
    match scalar {
        _ if is_surrogate(scalar) => None,
        0x0000 ..= 0x007F => Some(1),
        0x0080 ..= 0x07FF => Some(2),
        0x0800 ..= 0xFFFF => Some(3),
        0x10000 ..= MAX_SCALAR => Some(4),
        _ => None,
    }
}

/**
Appends the UTF-8 encoding of `scalar` to `utf8`.

Values above `0x10FFFF` and surrogates (`0xD800` to `0xDFFF`) are rejected with `Error::InvalidCodePoint`; nothing is appended in that case.
*/
pub fn push_scalar(utf8: &mut Vec<u8>, scalar: u32) -> Result<()> {
    if is_surrogate(scalar) {
        return Err(Error::InvalidCodePoint(scalar));
    }

    if scalar <= 0x007F {
        utf8.push(scalar as u8);
    } else if scalar <= 0x07FF {
        utf8.extend_from_slice(&[
            (((scalar >> 6) & 0b0001_1111) | 0b1100_0000) as u8,
            body(scalar),
        ]);
    } else if scalar <= 0xFFFF {
        utf8.extend_from_slice(&[
            (((scalar >> 12) & 0b0000_1111) | 0b1110_0000) as u8,
            body(scalar >> 6),
            body(scalar),
        ]);
    } else if scalar <= MAX_SCALAR {
        utf8.extend_from_slice(&[
            (((scalar >> 18) & 0b0000_0111) | 0b1111_0000) as u8,
            body(scalar >> 12),
            body(scalar >> 6),
            body(scalar),
        ]);
    } else {
        return Err(Error::InvalidCodePoint(scalar));
    }
    Ok(())
}

/**
Appending scalar values to a UTF-8 buffer.

`push_scalar` returns the buffer again so that pushes can be chained.
*/
pub trait Utf8Push {
    fn push_scalar(&mut self, scalar: u32) -> Result<&mut Self>;
}

impl Utf8Push for Vec<u8> {
    fn push_scalar(&mut self, scalar: u32) -> Result<&mut Self> {
        push_scalar(self, scalar)?;
        Ok(self)
    }
}
