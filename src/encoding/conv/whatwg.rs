/*!
Conversion using `encoding_rs`.

This backend understands the labels defined by the WHATWG Encoding Standard, and only converts to or from UTF-8.  Note that the standard maps several labels onto a different encoding than `iconv` would: `ISO-8859-1` and `US-ASCII`, for instance, both mean `windows-1252`.
*/
use std::str;
use encoding_rs::{Decoder, DecoderResult, Encoder, EncoderResult, Encoding, UTF_8};
use log::debug;
use crate::error::{Error, Result};
use super::{Status, Step, Transcoder};

enum Inner {
    Decode(Decoder),
    Encode(Encoder),
}

/**
An `encoding_rs` decoder (to UTF-8) or encoder (from UTF-8).

Neither direction substitutes replacement characters: anything that cannot be converted stops the conversion.
*/
pub struct Context {
    inner: Inner,
}

impl Context {
    /**
    Opens a converter from the encoding labelled `from` to the one labelled `to`.

    One of the two must be UTF-8.  Encodings that `encoding_rs` can decode but not encode into (UTF-16LE, UTF-16BE and `replacement`) are unsupported as targets.
    */
    pub fn open(from: &str, to: &str) -> Result<Self> {
        let src = Encoding::for_label(from.as_bytes());
        let dst = Encoding::for_label(to.as_bytes());

        let inner = match (src, dst) {
            (Some(src), Some(dst)) if dst == UTF_8 => Inner::Decode(src.new_decoder_without_bom_handling()),
            (Some(src), Some(dst)) if src == UTF_8 && dst.output_encoding() == dst => Inner::Encode(dst.new_encoder()),
            _ => {
                debug!("encoding_rs cannot convert from {:?} to {:?}", from, to);
                return Err(Error::unsupported(from, to));
            },
        };

        Ok(Context { inner })
    }
}

fn decoded(result: DecoderResult, read: usize, written: usize, last: bool) -> Step {
    match result {
        DecoderResult::InputEmpty => Step::done(read, written),
        DecoderResult::OutputFull => Step::full(read, written),
        // Only input held back from earlier rounds can be malformed once there is no more input.
        DecoderResult::Malformed(bad, _) if last => Step {
            read,
            written,
            status: Status::Incomplete { rewind: bad as usize },
        },
        DecoderResult::Malformed(bad, after) => Step {
            read,
            written,
            status: Status::Illegal { rewind: bad as usize + after as usize },
        },
    }
}

fn encoded(result: EncoderResult, read: usize, written: usize) -> Step {
    match result {
        EncoderResult::InputEmpty => Step::done(read, written),
        EncoderResult::OutputFull => Step::full(read, written),
        EncoderResult::Unmappable(c) => Step {
            read,
            written,
            status: Status::Illegal { rewind: c.len_utf8() },
        },
    }
}

impl Transcoder for Context {
    fn transcode(&mut self, input: &[u8], output: &mut [u8]) -> Step {
        match self.inner {
            Inner::Decode(ref mut decoder) => {
                let (result, read, written) = decoder.decode_to_utf8_without_replacement(input, output, false);
                decoded(result, read, written, false)
            },
            Inner::Encode(ref mut encoder) => {
                let (valid, invalid) = match str::from_utf8(input) {
                    Ok(valid) => (valid, None),
                    Err(err) => {
                        // `from_utf8` has just validated everything up to here.
                        let valid = unsafe { str::from_utf8_unchecked(&input[..err.valid_up_to()]) };
                        (valid, Some(err))
                    },
                };

                let (result, read, written) = encoder.encode_from_utf8_without_replacement(valid, output, false);
                match (result, invalid) {
                    (EncoderResult::InputEmpty, Some(err)) => Step {
                        read,
                        written,
                        status: match err.error_len() {
                            Some(_) => Status::Illegal { rewind: 0 },
                            None => Status::Incomplete { rewind: 0 },
                        },
                    },
                    (result, _) => encoded(result, read, written),
                }
            },
        }
    }

    fn finish(&mut self, output: &mut [u8]) -> Step {
        match self.inner {
            Inner::Decode(ref mut decoder) => {
                let (result, _, written) = decoder.decode_to_utf8_without_replacement(&[], output, true);
                decoded(result, 0, written, true)
            },
            Inner::Encode(ref mut encoder) => {
                let (result, _, written) = encoder.encode_from_utf8_without_replacement("", output, true);
                encoded(result, 0, written)
            },
        }
    }
}
