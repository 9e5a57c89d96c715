/// A caller-owned position into a sequence of integers.
///
/// Codecs take cursors by `&mut` and advance them as a side effect of a successful call, so a caller can chain
/// several codecs over the same buffers by passing the same cursors along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// Create a cursor at `pos`.
    pub fn new(pos: usize) -> Self {
        Cursor(pos)
    }

    /// Returns the current position.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Move the cursor to `pos`.
    #[inline]
    pub fn set(&mut self, pos: usize) {
        self.0 = pos;
    }

    /// Advance the cursor by one.
    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Advance the cursor by `n`.
    #[inline]
    pub fn add(&mut self, n: usize) {
        self.0 += n;
    }
}

impl From<usize> for Cursor {
    fn from(pos: usize) -> Self {
        Cursor(pos)
    }
}
