use alloc::vec::Vec;

use crate::AxisSlice;

/// Maps an index along one axis (rows or columns) to its offset and size.
///
/// This is the seam to the external size-and-position manager. Implementations
/// are expected to answer for any index the caller passes; out-of-range
/// indexes are a caller bug, not a recoverable condition.
pub trait AxisLayout {
    fn slice(&self, index: usize) -> AxisSlice;

    /// Whether offsets on this axis are currently compressed/adjusted (total
    /// content size exceeded the platform's safe coordinate range). Adjusted
    /// offsets are environment-dependent and must not be style-cached.
    fn offsets_adjusted(&self) -> bool {
        false
    }
}

/// Fixed-size axis: every index has the same size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformAxis {
    pub size: u32,
}

impl UniformAxis {
    pub const fn new(size: u32) -> Self {
        Self { size }
    }
}

impl AxisLayout for UniformAxis {
    fn slice(&self, index: usize) -> AxisSlice {
        AxisSlice {
            offset: (index as u64).saturating_mul(self.size as u64),
            size: self.size,
        }
    }
}

/// Axis with per-index sizes and precomputed prefix offsets.
///
/// Mostly useful for demos and tests; a real viewport usually brings its own
/// size manager and implements [`AxisLayout`] directly.
#[derive(Clone, Debug, Default)]
pub struct MeasuredAxis {
    offsets: Vec<u64>,
    sizes: Vec<u32>,
    adjusted: bool,
}

impl MeasuredAxis {
    pub fn from_sizes(sizes: &[u32]) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len());
        let mut offset = 0u64;
        for &size in sizes {
            offsets.push(offset);
            offset = offset.saturating_add(size as u64);
        }
        Self {
            offsets,
            sizes: sizes.to_vec(),
            adjusted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        match (self.offsets.last(), self.sizes.last()) {
            (Some(&offset), Some(&size)) => offset.saturating_add(size as u64),
            _ => 0,
        }
    }

    pub fn set_offsets_adjusted(&mut self, adjusted: bool) {
        self.adjusted = adjusted;
    }
}

impl AxisLayout for MeasuredAxis {
    fn slice(&self, index: usize) -> AxisSlice {
        AxisSlice {
            offset: self.offsets[index],
            size: self.sizes[index],
        }
    }

    fn offsets_adjusted(&self) -> bool {
        self.adjusted
    }
}
