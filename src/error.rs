/*!
Errors produced by conversions.
*/
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is above `0x10FFFF` or is a surrogate.
    #[error("{0} is not a valid code point")]
    InvalidCodePoint(u32),

    /// A UTF-16 surrogate at unit index `at` has no partner.
    #[error("unpaired surrogate 0x{unit:04X} at unit {at}")]
    MalformedSurrogate { unit: u16, at: usize },

    /// The bytes starting at `at` do not form a unit of the source encoding, or cannot be represented in the target encoding.
    #[error("an illegal sequence has been encountered at offset {at}")]
    IllegalSequence { at: usize },

    /// The input ends partway through a unit starting at `at`.
    #[error("an incomplete sequence has been encountered at offset {at}")]
    IncompleteSequence { at: usize },

    #[error("conversion from {from:?} to {to:?} is not supported")]
    UnsupportedEncoding { from: String, to: String },
}

impl Error {
    /**
    Returns the input byte offset at which a conversion failed, if this error has one.
    */
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Error::IllegalSequence { at } | Error::IncompleteSequence { at } => Some(at),
            _ => None,
        }
    }

    pub(crate) fn unsupported(from: &str, to: &str) -> Self {
        Error::UnsupportedEncoding {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}
