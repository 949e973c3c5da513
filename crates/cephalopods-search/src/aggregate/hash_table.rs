//! Hash-table aggregation with open addressing.

use cephalopods_core::Board;

use super::{Aggregator, Frontier, Weight};
use crate::SearchError;

const INITIAL_BITS: u32 = 10;

/// Golden-ratio multiplier for Fibonacci hashing.
const MULTIPLIER: u32 = 0x9E37_79B1;

/// Empty slot marker. Occupied slots store `(entry index + 1) << 32 | key`.
const EMPTY: u64 = 0;

/// Merges boards in an open-addressed hash table with linear probing.
///
/// Slots pack the 27-bit board key together with the index of its entry,
/// so probing compares keys without touching the entry array. Occupied
/// slot positions are remembered so a layer of size `n` is cleared in
/// `O(n)` regardless of the table capacity.
///
/// The table doubles whenever it would become more than half full.
#[derive(Debug, Clone)]
pub struct HashAggregator<W> {
    slots: Vec<u64>,
    bits: u32,
    entries: Vec<(Board, W)>,
    occupied: Vec<usize>,
}

impl<W: Weight> HashAggregator<W> {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![EMPTY; 1 << INITIAL_BITS],
            bits: INITIAL_BITS,
            entries: Vec::new(),
            occupied: Vec::new(),
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the merged weight for `board`, if present.
    #[must_use]
    pub fn get(&self, board: Board) -> Option<W> {
        let key = board.raw();
        let mut slot = self.home(key);
        loop {
            match self.slots[slot] {
                EMPTY => return None,
                packed if key_of(packed) == key => return Some(self.entries[index_of(packed)].1),
                _ => slot = (slot + 1) & self.mask(),
            }
        }
    }

    /// Iterates over the merged entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Board, W)> {
        self.entries.iter()
    }

    /// Adds every entry of `other` into this aggregator.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OutOfMemory`] if the storage cannot grow.
    pub fn merge(&mut self, other: &Self) -> Result<(), SearchError> {
        for &(board, weight) in &other.entries {
            self.insert(board, weight)?;
        }
        Ok(())
    }

    #[inline]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    fn home(&self, key: u32) -> usize {
        (key.wrapping_mul(MULTIPLIER) >> (32 - self.bits)) as usize
    }

    fn grow(&mut self) -> Result<(), SearchError> {
        let bits = self.bits + 1;
        let mut slots = Vec::new();
        slots.try_reserve_exact(1 << bits)?;
        slots.resize(1 << bits, EMPTY);
        self.occupied.clear();
        self.occupied.try_reserve(self.entries.len())?;

        self.slots = slots;
        self.bits = bits;
        for (index, &(board, _)) in self.entries.iter().enumerate() {
            let key = board.raw();
            let mut slot = self.home(key);
            while self.slots[slot] != EMPTY {
                slot = (slot + 1) & self.mask();
            }
            self.slots[slot] = pack(index, key);
            self.occupied.push(slot);
        }
        log::trace!("hash aggregator grew to {} slots", self.slots.len());
        Ok(())
    }

    fn clear_slots(&mut self) {
        for slot in self.occupied.drain(..) {
            self.slots[slot] = EMPTY;
        }
    }
}

impl<W: Weight> Default for HashAggregator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Aggregator<W> for HashAggregator<W> {
    fn insert(&mut self, board: Board, weight: W) -> Result<(), SearchError> {
        if (self.entries.len() + 1) * 2 > self.slots.len() {
            self.grow()?;
        }

        let key = board.raw();
        let mut slot = self.home(key);
        loop {
            match self.slots[slot] {
                EMPTY => {
                    self.entries.try_reserve(1)?;
                    self.occupied.try_reserve(1)?;
                    self.slots[slot] = pack(self.entries.len(), key);
                    self.entries.push((board, weight));
                    self.occupied.push(slot);
                    return Ok(());
                }
                packed if key_of(packed) == key => {
                    self.entries[index_of(packed)].1 += weight;
                    return Ok(());
                }
                _ => slot = (slot + 1) & self.mask(),
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn drain_into(&mut self, frontier: &mut Frontier<W>) -> Result<(), SearchError> {
        // Hand the entry array over wholesale and reuse the frontier's old
        // storage for the next layer.
        std::mem::swap(&mut self.entries, &mut frontier.entries);
        self.entries.clear();
        self.clear_slots();
        Ok(())
    }

    fn reset(&mut self) {
        self.entries.clear();
        self.clear_slots();
    }
}

#[inline]
fn pack(index: usize, key: u32) -> u64 {
    ((index as u64 + 1) << 32) | u64::from(key)
}

#[inline]
#[expect(clippy::cast_possible_truncation)]
fn key_of(packed: u64) -> u32 {
    packed as u32
}

#[inline]
#[expect(clippy::cast_possible_truncation)]
fn index_of(packed: u64) -> usize {
    ((packed >> 32) - 1) as usize
}
