//! Growable slot array.
//!
//! An ordered, index-addressable sequence of owned elements. Two orthogonal
//! construction-time controls shape its behavior:
//! * `auto_grow`: writes past the current capacity either extend the
//!   backing storage (to `max(2×capacity, index + 1)`) or are rejected.
//!   Removal under `auto_grow` also shrinks storage once occupancy drops to
//!   half of capacity or less.
//! * per-write `force`: writing an occupied slot either overwrites or is
//!   rejected.
//!
//! Invariants:
//! * `count` is one past the highest index ever occupied through a set
//!   operation and never exceeds `capacity`.
//! * Removal preserves the relative order of the remaining elements
//!   (shift-left).
//! * Every element is owned by the array and dropped exactly once: on
//!   removal handed to the caller, otherwise when the array is dropped.
//!
//! Slots inside `0..count` may be empty when writes were sparse; traversal
//! surfaces them as `None` so fixed-layout users can distinguish a missing
//! field from an absent index.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrayError {
    #[error("slot {0} is already occupied")]
    SlotOccupied(usize),
    #[error("index {0} is beyond capacity and auto-grow is disabled")]
    NoAutoGrow(usize),
}

#[derive(Debug, PartialEq)]
pub struct GrowArray<T> {
    slots: Vec<Option<T>>,
    count: usize,
    auto_grow: bool,
}

impl<T> GrowArray<T> {
    /// Create an empty array with `initial` slots. `initial` must be
    /// non-zero; a zero-capacity array only arises through [`resize_by`].
    ///
    /// [`resize_by`]: GrowArray::resize_by
    pub fn new(initial: usize, auto_grow: bool) -> Self {
        assert!(initial > 0, "initial capacity must be non-zero");
        let mut slots = Vec::new();
        slots.resize_with(initial, || None);
        Self {
            slots,
            count: 0,
            auto_grow,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of logically occupied leading slots (highest set index + 1).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn auto_grow(&self) -> bool {
        self.auto_grow
    }

    /// Grow or shrink capacity by `delta` slots. New slots are empty. A
    /// delta that would take capacity to zero or below clears the array
    /// entirely (elements dropped, zero capacity). Returns the new capacity.
    pub fn resize_by(&mut self, delta: isize) -> usize {
        let new_cap = self.slots.len() as isize + delta;
        if new_cap <= 0 {
            self.slots = Vec::new();
            self.count = 0;
            return 0;
        }
        let new_cap = new_cap as usize;
        if new_cap < self.slots.len() {
            self.slots.truncate(new_cap);
            self.count = self.count.min(new_cap);
        } else {
            self.slots.resize_with(new_cap, || None);
        }
        new_cap
    }

    /// Write `value` at `index`.
    ///
    /// An occupied slot is overwritten only when `force` is set, otherwise
    /// the write is rejected. An index beyond capacity grows the array when
    /// `auto_grow` is set and is rejected otherwise. On success `count`
    /// becomes at least `index + 1`.
    pub fn set_at(&mut self, index: usize, value: T, force: bool) -> Result<(), ArrayError> {
        if index >= self.slots.len() {
            if !self.auto_grow {
                return Err(ArrayError::NoAutoGrow(index));
            }
            let new_cap = (self.slots.len() * 2).max(index + 1);
            self.slots.resize_with(new_cap, || None);
        } else if self.slots[index].is_some() && !force {
            return Err(ArrayError::SlotOccupied(index));
        }
        self.slots[index] = Some(value);
        self.count = self.count.max(index + 1);
        Ok(())
    }

    /// Append `value` after the last occupied index.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.set_at(self.count, value, false)
    }

    /// Append an ordered sequence of values, stopping at the first
    /// rejection. Returns how many were appended.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let mut appended = 0;
        for value in values {
            if self.push(value).is_err() {
                break;
            }
            appended += 1;
        }
        appended
    }

    /// Value at `index`, or `None` when out of capacity or the slot is
    /// empty. Never mutates.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Remove the value at `index`, shifting subsequent elements left by
    /// one. Returns `None` for an index at or past `count` (the slot itself
    /// may also have been empty, in which case the shift still happens).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        let value = self.slots[index].take();
        for i in index..self.count - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.count -= 1;
        if self.auto_grow && self.count <= self.slots.len() / 2 {
            self.slots.truncate(self.count.max(1));
        }
        value
    }

    /// Remove the last occupied index.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.remove_at(self.count - 1)
    }

    /// Lazily visit every slot of `0..count` in index order. Empty (sparse)
    /// slots are surfaced as `None`. The array must not be mutated during
    /// traversal; the borrow checker enforces that here.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().take(self.count).map(|slot| slot.as_ref())
    }

    /// Occupied values only, in index order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().flatten()
    }

    /// First element matching a caller-supplied predicate.
    pub fn find_by<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<&T> {
        self.values().find(|v| predicate(v))
    }
}

impl<T: PartialEq> GrowArray<T> {
    /// First element comparing equal to `value`. Equality is the element
    /// type's, not identity.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.values().find(|v| *v == value)
    }

    /// Index of the first element comparing equal to `value`.
    pub fn find_index(&self, value: &T) -> Option<usize> {
        self.iter()
            .position(|slot| slot.is_some_and(|v| v == value))
    }

    /// Remove the first element comparing equal to `value`, preserving the
    /// order of the rest. Returns the removed element.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.find_index(value)?;
        self.remove_at(index)
    }
}
