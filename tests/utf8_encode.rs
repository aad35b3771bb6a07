macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use quickcheck_macros::quickcheck;
use rstest::rstest;
use uniconv::encoding::utf8::{encoded_len, push_scalar};
use uniconv::{utf8_from_scalar, Error, Utf8Push};

#[rstest]
#[case(0x00, &[0x00])]
#[case(0x41, &[0x41])]
#[case(0x7F, &[0x7F])]
#[case(0x80, &[0xC2, 0x80])]
#[case(0xE7, &[0xC3, 0xA7])]
#[case(0x7FF, &[0xDF, 0xBF])]
#[case(0x800, &[0xE0, 0xA0, 0x80])]
#[case(0x20AC, &[0xE2, 0x82, 0xAC])]
#[case(0xD7FF, &[0xED, 0x9F, 0xBF])]
#[case(0xE000, &[0xEE, 0x80, 0x80])]
#[case(0xFFFF, &[0xEF, 0xBF, 0xBF])]
#[case(0x10000, &[0xF0, 0x90, 0x80, 0x80])]
#[case(0x1F600, &[0xF0, 0x9F, 0x98, 0x80])]
#[case(0x10FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
fn encodes_boundaries(#[case] scalar: u32, #[case] expected: &[u8]) {
    assert_eq!(utf8_from_scalar(scalar).expect(here!()), expected);
    assert_eq!(encoded_len(scalar), Some(expected.len()));
}

#[rstest]
#[case(0x110000)]
#[case(0x7FFF_FFFF)]
#[case(u32::MAX)]
#[case(0xD800)]
#[case(0xDBFF)]
#[case(0xDC00)]
#[case(0xDFFF)]
fn rejects_non_scalars(#[case] value: u32) {
    assert_eq!(utf8_from_scalar(value), Err(Error::InvalidCodePoint(value)));
    assert_eq!(encoded_len(value), None);
}

#[test]
fn invalid_value_is_named_in_message() {
    let err = utf8_from_scalar(0x110000).unwrap_err();
    assert_eq!(err.to_string(), "1114112 is not a valid code point");
}

#[test]
fn failed_push_leaves_buffer_alone() {
    let mut utf8 = b"ok".to_vec();
    assert!(push_scalar(&mut utf8, 0x110000).is_err());
    assert_eq!(utf8, b"ok");
}

#[test]
fn push_chains() {
    let mut utf8 = Vec::new();
    utf8.push_scalar('g' as u32).expect(here!())
        .push_scalar(0xAA).expect(here!())
        .push_scalar('r' as u32).expect(here!())
        .push_scalar(0xE7).expect(here!())
        .push_scalar('o' as u32).expect(here!())
        .push_scalar('n' as u32).expect(here!());
    assert_eq!(utf8, "gªrçon".as_bytes());
}

#[quickcheck]
fn agrees_with_char(c: char) -> bool {
    let mut buf = [0; 4];
    utf8_from_scalar(c as u32).ok().as_deref() == Some(c.encode_utf8(&mut buf).as_bytes())
}

#[quickcheck]
fn continuation_bytes_are_marked(scalar: u32) -> bool {
    let scalar = scalar % 0x110000;
    match utf8_from_scalar(scalar) {
        Ok(bytes) => {
            let expected_len = match scalar {
                0 ..= 0x7F => 1,
                0x80 ..= 0x7FF => 2,
                0x800 ..= 0xFFFF => 3,
                _ => 4,
            };
            bytes.len() == expected_len
                && bytes[1..].iter().all(|b| b & 0b1100_0000 == 0b1000_0000)
        },
        Err(Error::InvalidCodePoint(v)) => v == scalar && (0xD800..=0xDFFF).contains(&scalar),
        Err(_) => false,
    }
}

#[quickcheck]
fn ascii_is_one_byte(b: u8) -> bool {
    let scalar = (b & 0x7F) as u32;
    utf8_from_scalar(scalar).ok() == Some(vec![scalar as u8])
}
