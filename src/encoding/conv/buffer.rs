/**
Scratch space that a converter writes each round of output into.

The buffer never shrinks, and only ever grows by doubling.  It knows nothing about the converter filling it.
*/
#[derive(Debug)]
pub struct ScratchBuffer {
    data: Vec<u8>,
}

impl ScratchBuffer {
    /// Creates a zeroed buffer of `len` bytes.  A length of zero is raised to one so that doubling always makes room.
    pub fn new(len: usize) -> Self {
        ScratchBuffer {
            data: vec![0; len.max(1)],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Doubles the length of the buffer.  Existing contents are not preserved in any meaningful way.
    pub fn grow(&mut self) {
        let len = self.data.len() * 2;
        self.data.resize(len, 0);
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }

    /// The first `written` bytes, as filled by the last round.
    ///
    /// # Panics
    ///
    /// Panics if `written` is larger than the buffer.
    #[inline]
    pub fn filled(&self, written: usize) -> &[u8] {
        &self.data[..written]
    }
}
