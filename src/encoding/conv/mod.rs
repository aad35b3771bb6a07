/*!
Encoding conversion support.

Conversion between arbitrary named encodings is delegated to a stateful converter (a `Transcoder`), which this module drives across the whole input.  Each round the converter writes as much as it can into a scratch buffer; the engine keeps whatever was written, grows the buffer when not even one unit fit, and turns the converter's complaints into `Error`s carrying the input offset at which they happened.

The platform converter is re-exported as `os`: `iconv` on unix, `encoding_rs` everywhere else.
*/
use log::{debug, trace};
use crate::error::{Error, Result};
use self::buffer::ScratchBuffer;

pub mod buffer;
pub mod options;
pub mod whatwg;

#[cfg(unix)]
pub mod iconv;

#[cfg(unix)]
pub use self::iconv as os;

#[cfg(not(unix))]
pub use self::whatwg as os;

pub use self::options::Options;

/// The name every backend recognises for UTF-8.
pub const UTF_8: &str = "UTF-8";

/// How a single round of conversion ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// All of the input given to this round was consumed.
    Exhausted,
    /// The output buffer ran out of room.
    OutputFull,
    /**
    The input contains a sequence that is invalid in the source encoding, or that cannot be represented in the target encoding.

    `rewind` is how many bytes the converter had already consumed (counted in `Step::read`) that belong to the offending sequence.
    */
    Illegal { rewind: usize },
    /// The input ends partway through a unit.  `rewind` as for `Illegal`.
    Incomplete { rewind: usize },
}

/// The outcome of a single round of conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Input bytes consumed.
    pub read: usize,
    /// Output bytes written to the front of the buffer.
    pub written: usize,
    pub status: Status,
}

impl Step {
    pub fn done(read: usize, written: usize) -> Self {
        Step { read, written, status: Status::Exhausted }
    }

    pub fn full(read: usize, written: usize) -> Self {
        Step { read, written, status: Status::OutputFull }
    }
}

/**
A stateful converter bound to a (source, target) encoding pair.

Implementations are owned by a single conversion call and release any resources they hold when dropped.
*/
pub trait Transcoder {
    /**
    Converts as much of `input` as fits into `output`.

    Conversion stops at the first sequence that cannot be converted.  State carried between calls (shift states, partial units) belongs to the converter.
    */
    fn transcode(&mut self, input: &[u8], output: &mut [u8]) -> Step;

    /**
    Called once all input has been consumed.  Writes whatever the converter still needs to emit (such as a return to the initial shift state) and reports input left dangling.

    `Step::read` is ignored.  The default has nothing to flush.
    */
    fn finish(&mut self, output: &mut [u8]) -> Step {
        let _ = output;
        Step::done(0, 0)
    }
}

enum Round {
    Continue,
    Stop,
}

/**
Runs `transcoder` over all of `input`, returning the complete output.

The scratch buffer starts at the larger of `input.len()` and `options.min_capacity`.
*/
pub fn transcode<T>(transcoder: &mut T, input: &[u8], options: &Options) -> Result<Vec<u8>>
where T: Transcoder + ?Sized {
    let mut output = Vec::with_capacity(input.len());
    let mut scratch = ScratchBuffer::new(options.initial_capacity(input.len()));
    let mut consumed = 0;

    while consumed < input.len() {
        let step = transcoder.transcode(&input[consumed..], scratch.as_mut_slice());
        if step.status == Status::Exhausted && step.read == 0 && step.written == 0 {
            // The converter refuses to move; don't spin on it.
            debug!("converter made no progress at offset {}", consumed);
            return Err(Error::IllegalSequence { at: consumed });
        }
        let at = consumed;
        consumed += step.read;
        settle(step, at, &mut scratch, &mut output)?;
    }

    loop {
        let step = transcoder.finish(scratch.as_mut_slice());
        let step = Step { read: 0, ..step };
        if let Round::Stop = settle(step, consumed, &mut scratch, &mut output)? {
            break;
        }
    }

    Ok(output)
}

/**
Applies the outcome of one round that started at input offset `at`.
*/
fn settle(step: Step, at: usize, scratch: &mut ScratchBuffer, output: &mut Vec<u8>) -> Result<Round> {
    // Output produced alongside an error is still good.
    output.extend_from_slice(scratch.filled(step.written));

    let offset = |rewind: usize| (at + step.read).saturating_sub(rewind);

    match step.status {
        Status::Exhausted => Ok(Round::Stop),
        Status::OutputFull => {
            if step.written == 0 {
                // Not even one unit fits.
                scratch.grow();
                trace!("scratch buffer grown to {} bytes", scratch.len());
            }
            Ok(Round::Continue)
        },
        Status::Illegal { rewind } => {
            let at = offset(rewind);
            debug!("illegal sequence at offset {}", at);
            Err(Error::IllegalSequence { at })
        },
        Status::Incomplete { rewind } => {
            let at = offset(rewind);
            debug!("incomplete sequence at offset {}", at);
            Err(Error::IncompleteSequence { at })
        },
    }
}

/// Converts `input` from the encoding named `from` to the one named `to`.
pub fn convert(input: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
    convert_with(input, from, to, &Options::default())
}

pub fn convert_with(input: &[u8], from: &str, to: &str, options: &Options) -> Result<Vec<u8>> {
    let mut context = os::Context::open(from, to)?;
    transcode(&mut context, input, options)
}

/// Converts `bytes` in the named encoding to UTF-8.
pub fn to_utf8(bytes: &[u8], encoding: &str) -> Result<Vec<u8>> {
    to_utf8_with(bytes, encoding, &Options::default())
}

pub fn to_utf8_with(bytes: &[u8], encoding: &str, options: &Options) -> Result<Vec<u8>> {
    convert_with(bytes, encoding, UTF_8, options)
}

/**
Converts `bytes` in the named encoding to a `String`.

The converter is trusted to produce UTF-8.  If it somehow does not, this reports an illegal sequence at the end of the input, since there is no way of knowing which input produced the bad output.
*/
pub fn to_utf8_string(bytes: &[u8], encoding: &str) -> Result<String> {
    let utf8 = to_utf8(bytes, encoding)?;
    String::from_utf8(utf8).map_err(|_| Error::IllegalSequence { at: bytes.len() })
}

/// Converts UTF-8 to the named encoding.
pub fn from_utf8(utf8: &[u8], encoding: &str) -> Result<Vec<u8>> {
    from_utf8_with(utf8, encoding, &Options::default())
}

pub fn from_utf8_with(utf8: &[u8], encoding: &str, options: &Options) -> Result<Vec<u8>> {
    convert_with(utf8, UTF_8, encoding, options)
}
