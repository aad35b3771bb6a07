use crate::error::Error;
use super::utf8::encoded_len;

/**
Yields each UTF-32 unit as a scalar value.

Units that are not scalar values produce `Error::InvalidCodePoint`, after which the iterator is exhausted.
*/
pub struct Utf32Scalars<It> {
    iter: Option<It>,
}

impl<It> Utf32Scalars<It> {
    pub fn new(iter: It) -> Self {
        Utf32Scalars {
            iter: Some(iter),
        }
    }
}

impl<It> Iterator for Utf32Scalars<It> where It: Iterator<Item=u32> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cu = self.iter.as_mut()?.next()?;
        match encoded_len(cu) {
            Some(_) => Some(Ok(cu)),
            None => {
                self.iter = None;
                Some(Err(Error::InvalidCodePoint(cu)))
            },
        }
    }
}
