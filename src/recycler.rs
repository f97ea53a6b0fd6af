#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use alloc::vec::Vec;

use crate::{GridCoord, GridRect, SlotKey};

/// The coordinate → slot-key assignment in effect as of the most recent
/// [`KeyRecycler::assign`] call.
#[cfg(feature = "std")]
pub type KeyAssignment = HashMap<GridCoord, SlotKey>;
/// The coordinate → slot-key assignment in effect as of the most recent
/// [`KeyRecycler::assign`] call.
#[cfg(not(feature = "std"))]
pub type KeyAssignment = BTreeMap<GridCoord, SlotKey>;

/// Hands out small integer identity keys for the coordinates of a sliding
/// rectangular window.
///
/// A coordinate keeps its key for as long as it stays inside the rectangle;
/// once it leaves, the key goes back into the pool and the next newcomer takes
/// the smallest free one. Because the window slides rather than jumping
/// randomly, the pool stays bounded by the window size no matter how far the
/// grid is scrolled — a downstream renderer keyed by these values therefore
/// holds a bounded number of live elements.
///
/// The stored assignment is fully replaced on every call; coordinates no
/// longer referenced are dropped, never accumulated.
#[derive(Clone, Debug, Default)]
pub struct KeyRecycler {
    assigned: KeyAssignment,
}

impl KeyRecycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key currently assigned to `coord`, if it was inside the last rect.
    pub fn key_for(&self, coord: GridCoord) -> Option<SlotKey> {
        self.assigned.get(&coord).copied()
    }

    /// Number of coordinates in the current assignment.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Recomputes the assignment for `rect` and returns it.
    ///
    /// Two passes in row-major order: coordinates already present in the
    /// previous assignment carry their key forward; everyone else takes the
    /// smallest key not in use. Within one call the keys are pairwise
    /// distinct, and the maximum key never exceeds the rect's cell count.
    ///
    /// An empty rect yields an empty assignment.
    pub fn assign(&mut self, rect: GridRect) -> &KeyAssignment {
        let mut next = KeyAssignment::new();
        let mut in_use: Vec<bool> = Vec::new();

        let mut carried = 0usize;
        for coord in rect.coords() {
            if let Some(&key) = self.assigned.get(&coord) {
                mark_in_use(&mut in_use, key);
                next.insert(coord, key);
                carried = carried.saturating_add(1);
            }
        }

        // The cursor only moves forward, so the inner scan is amortized over
        // the whole rect.
        let mut cursor: SlotKey = 1;
        for coord in rect.coords() {
            if next.contains_key(&coord) {
                continue;
            }
            while in_use.get(cursor as usize).copied().unwrap_or(false) {
                cursor += 1;
            }
            mark_in_use(&mut in_use, cursor);
            next.insert(coord, cursor);
        }

        rdebug!(
            cells = rect.len(),
            carried,
            fresh = next.len().saturating_sub(carried),
            "KeyRecycler::assign"
        );

        self.assigned = next;
        &self.assigned
    }
}

fn mark_in_use(in_use: &mut Vec<bool>, key: SlotKey) {
    let i = key as usize;
    if in_use.len() <= i {
        in_use.resize(i + 1, false);
    }
    in_use[i] = true;
}
