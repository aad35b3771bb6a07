use crate::error::Error;

const HIGH_FIRST: u16 = 0xD800;
const HIGH_LAST: u16 = 0xDBFF;
const LOW_FIRST: u16 = 0xDC00;
const LOW_LAST: u16 = 0xDFFF;

/**
Decodes UTF-16 units into scalar values, joining surrogate pairs.

An unpaired or out-of-order surrogate produces `Error::MalformedSurrogate`, after which the iterator is exhausted.
*/
pub struct Utf16Scalars<It> {
    at: usize,
    iter: Option<It>,
}

impl<It> Utf16Scalars<It> {
    pub fn new(iter: It) -> Self {
        Utf16Scalars {
            at: 0,
            iter: Some(iter),
        }
    }

    fn fail(&mut self, unit: u16) -> Option<Result<u32, Error>> {
        self.iter = None;
        Some(Err(Error::MalformedSurrogate { unit, at: self.at }))
    }
}

impl<It> Iterator for Utf16Scalars<It> where It: Iterator<Item=u16> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cu0 = match self.iter.as_mut()?.next() {
            Some(cu0) => cu0,
            None => return None,
        };

        match cu0 {
            LOW_FIRST ..= LOW_LAST => self.fail(cu0),
            HIGH_FIRST ..= HIGH_LAST => {
                let cu1 = match self.iter.as_mut().and_then(Iterator::next) {
                    Some(cu1) => cu1,
                    None => return self.fail(cu0),
                };

                if !(LOW_FIRST <= cu1 && cu1 <= LOW_LAST) {
                    // The high surrogate is the one left without a partner.
                    return self.fail(cu0);
                }

                self.at += 2;
                let hi = (cu0 - HIGH_FIRST) as u32;
                let lo = (cu1 - LOW_FIRST) as u32;
                Some(Ok(0x10000 + hi * 0x400 + lo))
            },
            cu0 => {
                self.at += 1;
                Some(Ok(cu0 as u32))
            },
        }
    }
}
