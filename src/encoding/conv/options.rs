/// Smallest scratch buffer a conversion starts with.
pub const DEFAULT_MIN_CAPACITY: usize = 8;

/**
Configuration for a conversion.

# Default

`min_capacity` is `DEFAULT_MIN_CAPACITY`.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /**
    Lower bound on the size of the initial scratch buffer.

    The scratch buffer starts at the larger of this and the input length, and doubles whenever the converter cannot fit even one unit into it.  Values below one are treated as one.
    */
    pub min_capacity: usize,
}

impl Options {
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    pub(crate) fn initial_capacity(&self, input_len: usize) -> usize {
        input_len.max(self.min_capacity).max(1)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}
