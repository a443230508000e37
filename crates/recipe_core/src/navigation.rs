//! Circular cursor over a collection of known length.

/// Position of the displayed recipe. Meaningless while the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// The index, or `None` when there is nothing to point at.
    pub fn index(self, len: usize) -> Option<usize> {
        (len > 0).then_some(self.index)
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Moves straight to `index`. Callers only offer indices they rendered, so
    /// an out-of-range value is a caller bug; release builds leave the cursor
    /// where it was.
    pub fn jump_to(&mut self, index: usize, len: usize) {
        debug_assert!(index < len, "jump_to({index}) with {len} recipes");
        if index < len {
            self.index = index;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.index = 0;
    }
}
