macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use uniconv::encoding::conv::{transcode, whatwg::Context};
use uniconv::{Error, Options};

fn whatwg(input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, Error> {
    let mut context = Context::open(from, to)?;
    transcode(&mut context, input, &Options::default())
}

const NIHON_SJIS: &[u8] = b"\x93\xfa\x96\x7b";
const NIHON_EUC: &[u8] = b"\xc6\xfc\xcb\xdc";

#[test]
fn test_garcon() {
    const WORD: &str = "gªrçon";
    const WORD_MB: &[u8] = b"g\xaar\xe7on";

    assert_eq!(whatwg(WORD_MB, "windows-1252", "UTF-8").expect(here!()), WORD.as_bytes());
    assert_eq!(whatwg(WORD.as_bytes(), "UTF-8", "windows-1252").expect(here!()), WORD_MB);
}

#[test]
fn multibyte_round_trip() {
    for &(label, bytes) in &[("Shift_JIS", NIHON_SJIS), ("EUC-JP", NIHON_EUC)] {
        let utf8 = whatwg(bytes, label, "UTF-8").expect(here!());
        assert_eq!(utf8, "日本".as_bytes());
        assert_eq!(whatwg(&utf8, "UTF-8", label).expect(here!()), bytes);
    }
}

#[test]
fn shift_state_is_reset() {
    let jis = whatwg("日本".as_bytes(), "UTF-8", "ISO-2022-JP").expect(here!());
    assert_eq!(jis, b"\x1b$BF|K\\\x1b(B");
    assert_eq!(whatwg(&jis, "ISO-2022-JP", "UTF-8").expect(here!()), "日本".as_bytes());
}

#[test]
fn growth_matches_single_round() {
    let input = NIHON_SJIS.repeat(500);
    let small = Options::default().with_min_capacity(1);
    let big = Options::default().with_min_capacity(1 << 16);

    let mut context = Context::open("Shift_JIS", "UTF-8").expect(here!());
    let a = transcode(&mut context, &input, &small).expect(here!());
    let mut context = Context::open("Shift_JIS", "UTF-8").expect(here!());
    let b = transcode(&mut context, &input, &big).expect(here!());

    assert_eq!(a, b);
    assert_eq!(a, "日本".repeat(500).as_bytes());
}

#[test]
fn illegal_byte() {
    let input = b"ab\xffcd";
    assert_eq!(whatwg(input, "UTF-8", "UTF-8"), Err(Error::IllegalSequence { at: 2 }));
    assert_eq!(whatwg(&input[..2], "UTF-8", "UTF-8").expect(here!()), b"ab");
}

#[test]
fn incomplete_at_end() {
    let input = b"ab\x93";
    assert_eq!(whatwg(input, "Shift_JIS", "UTF-8"), Err(Error::IncompleteSequence { at: 2 }));

    let input = b"ab\xe2\x82";
    assert_eq!(whatwg(input, "UTF-8", "UTF-8"), Err(Error::IncompleteSequence { at: 2 }));
}

#[test]
fn unmappable() {
    let input = "aé😀b".as_bytes();
    assert_eq!(whatwg(input, "UTF-8", "windows-1252"), Err(Error::IllegalSequence { at: 3 }));
}

#[test]
fn invalid_utf8_input() {
    assert_eq!(whatwg(b"ab\xff", "UTF-8", "Shift_JIS"), Err(Error::IllegalSequence { at: 2 }));
    assert_eq!(whatwg(b"ab\xe6\x97", "UTF-8", "Shift_JIS"), Err(Error::IncompleteSequence { at: 2 }));
}

#[test]
fn unsupported() {
    assert!(Context::open("no-such-thing", "UTF-8").is_err());
    assert!(Context::open("Shift_JIS", "EUC-JP").is_err());
    assert_eq!(Context::open("UTF-8", "UTF-16LE").err(),
        Some(Error::UnsupportedEncoding { from: "UTF-8".into(), to: "UTF-16LE".into() }));
}

#[test]
fn utf16_source() {
    assert_eq!(whatwg(b"\x3d\xd8\x00\xde", "UTF-16LE", "UTF-8").expect(here!()), "😀".as_bytes());
}

#[test]
fn empty() {
    assert_eq!(whatwg(b"", "Shift_JIS", "UTF-8").expect(here!()), b"");
    assert_eq!(whatwg(b"", "UTF-8", "ISO-2022-JP").expect(here!()), b"");
}
