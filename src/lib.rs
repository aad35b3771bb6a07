/*!
This crate converts text between Unicode code points, UTF-8/UTF-16/UTF-32, and legacy multibyte ("MBCS") encodings.

There are two independent halves:

- Unicode to UTF-8, which is done entirely in this crate: see `encoding::utf8`, `encoding::utf16` and `encoding::utf32`.
- Legacy encodings to and from UTF-8, which is delegated to a stateful converter supplied by the platform (`iconv` on unix) or by `encoding_rs`.  See `encoding::conv`.

# Quick Reference

| Input | Output | Function |
| ---: | --- | --- |
| bytes in a named encoding | UTF-8 | `to_utf8` |
| UTF-8 | bytes in a named encoding | `from_utf8` |
| bytes in a named encoding | bytes in another named encoding | `convert` |
| `&[u16]` (UTF-16) | UTF-8 | `utf8_from_utf16` |
| `&[u32]` (UTF-32) | UTF-8 | `utf8_from_utf32` |
| one scalar value | UTF-8 | `utf8_from_scalar` |
| one scalar value | appended to a `Vec<u8>` | `Utf8Push::push_scalar` |

```
use uniconv::Utf8Push;

let mut utf8 = b"gar".to_vec();
utf8.push_scalar(0xE7).unwrap().push_scalar('o' as u32).unwrap();
assert_eq!(utf8, "garço".as_bytes());

assert_eq!(uniconv::utf8_from_utf16(&[0xD83D, 0xDE00]).unwrap(), b"\xF0\x9F\x98\x80");
```

Encoding names are handed to the converter exactly as given.  This crate does not validate or normalise them.
*/

pub mod encoding;
pub mod error;

#[cfg(unix)]
mod ffi;

pub use encoding::conv::{convert, convert_with, from_utf8, from_utf8_with, to_utf8, to_utf8_string, to_utf8_with, Options};
pub use encoding::utf8::Utf8Push;
pub use encoding::{utf8_from_scalar, utf8_from_utf16, utf8_from_utf32};
pub use error::{Error, Result};
