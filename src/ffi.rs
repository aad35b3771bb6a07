#![allow(non_camel_case_types)]
use libc::{c_char, c_void, size_t};

// TODO: switch to the libc bindings once they cover every unix target we build on.

pub type iconv_t = *mut c_void;

/// `(size_t)-1`, returned by `iconv` on error and by `iconv_open` (as a pointer) on failure.
pub const ICONV_ERROR: size_t = -1isize as size_t;

#[cfg_attr(any(target_os="macos", target_os="ios"), link(name="iconv"))]
extern "C" {
    pub fn iconv_open(tocode: *const c_char, fromcode: *const c_char) -> iconv_t;
    pub fn iconv(cd: iconv_t,
        inbuf: *mut *mut c_char, inbytesleft: *mut size_t,
        outbuf: *mut *mut c_char, outbytesleft: *mut size_t) -> size_t;
    pub fn iconv_close(cd: iconv_t) -> libc::c_int;
}
