/*!
Conversion using the system `iconv`.
*/
use std::ffi::CString;
use std::io;
use std::ptr;
use libc::{c_char, size_t, E2BIG, EILSEQ, EINVAL};
use log::debug;
use crate::error::{Error, Result};
use crate::ffi::{iconv, iconv_close, iconv_open, iconv_t, ICONV_ERROR};
use super::{Status, Step, Transcoder};

/**
An open `iconv` conversion descriptor.

The descriptor is closed exactly once, when the `Context` is dropped.
*/
#[derive(Debug)]
pub struct Context {
    cd: iconv_t,
}

impl Context {
    /**
    Opens a converter from the encoding named `from` to the encoding named `to`.

    Names are passed to `iconv_open` untouched.  Fails with `Error::UnsupportedEncoding` if `iconv` does not know either name, or if a name contains a zero byte.
    */
    pub fn open(from: &str, to: &str) -> Result<Self> {
        let (c_from, c_to) = match (CString::new(from), CString::new(to)) {
            (Ok(c_from), Ok(c_to)) => (c_from, c_to),
            _ => return Err(Error::unsupported(from, to)),
        };

        let cd = unsafe { iconv_open(c_to.as_ptr(), c_from.as_ptr()) };
        if cd as size_t == ICONV_ERROR {
            debug!("iconv_open({:?}, {:?}) failed: {}", to, from, io::Error::last_os_error());
            return Err(Error::unsupported(from, to));
        }

        Ok(Context { cd })
    }

    fn call(&mut self, input: Option<&[u8]>, output: &mut [u8]) -> Step {
        let (mut in_ptr, mut in_left) = match input {
            Some(input) => (input.as_ptr() as *mut c_char, input.len() as size_t),
            None => (ptr::null_mut(), 0),
        };
        let mut out_ptr = output.as_mut_ptr() as *mut c_char;
        let mut out_left = output.len() as size_t;

        let r = unsafe {
            match input {
                // iconv never writes through the input pointer; it only advances it.
                Some(_) => iconv(self.cd, &mut in_ptr, &mut in_left, &mut out_ptr, &mut out_left),
                None => iconv(self.cd, ptr::null_mut(), ptr::null_mut(), &mut out_ptr, &mut out_left),
            }
        };

        let read = input.map_or(0, |input| input.len() - in_left as usize);
        let written = output.len() - out_left as usize;

        let status = if r != ICONV_ERROR {
            Status::Exhausted
        } else {
            match io::Error::last_os_error().raw_os_error() {
                Some(E2BIG) => Status::OutputFull,
                Some(EINVAL) => Status::Incomplete { rewind: 0 },
                Some(EILSEQ) => Status::Illegal { rewind: 0 },
                other => {
                    debug!("iconv failed with unexpected errno {:?}", other);
                    Status::Illegal { rewind: 0 }
                },
            }
        };

        Step { read, written, status }
    }
}

impl Transcoder for Context {
    fn transcode(&mut self, input: &[u8], output: &mut [u8]) -> Step {
        self.call(Some(input), output)
    }

    fn finish(&mut self, output: &mut [u8]) -> Step {
        self.call(None, output)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            iconv_close(self.cd);
        }
    }
}
