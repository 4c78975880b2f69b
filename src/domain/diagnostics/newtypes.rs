// SPDX-License-Identifier: MPL-2.0
//! Size of the page's diagnostic history.

/// How many events a page keeps (16 to 2048).
///
/// The default of 256 covers a few dozen uploads with their drag, reveal and
/// toast events. The history lives in the tab's memory and is exported as one
/// JSON string, which is why the ceiling stays low.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 2048;
    pub const DEFAULT: usize = 256;
}

/// Number of diagnostic events kept, always within
/// [`buffer_capacity_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Clamps `events` into the supported range.
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
