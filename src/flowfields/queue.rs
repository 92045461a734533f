//! A min-heap over field cells keyed by a float cost, with an `O(1)` membership test. Both the
//! integration builder and the LOS builder rely on `contains` to implement the "no duplicate
//! pushes" relaxation rule: a cell already waiting in the frontier is updated in place by
//! pushing its improved key and letting the stale entry lazily die on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::flowfields::grid::{FieldCell, FIELD_RES_C, FIELD_RES_R};

/// Wraps an `f32` so it can sit in a `BinaryHeap`, which requires `Ord`. Costs produced by this
/// crate are never `NaN`, so `partial_cmp` is unwrapped rather than handled.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Key(f32);

impl Eq for Key {}

impl PartialOrd for Key {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Key {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.partial_cmp(&other.0).expect("cost is NaN")
	}
}

/// An entry popped from the queue: the cell and the key it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoppedEntry {
	/// The cell that was popped
	pub cell: FieldCell,
	/// The key (minimum accumulated cost) it was queued with
	pub key: f32,
}

/// Indexed min-priority-queue of [FieldCell] keyed by `f32`. Backed by a [BinaryHeap] for
/// ordering and a fixed bitmap for `O(1)` membership, as required by the "no duplicate pushes"
/// relaxation rule used by the integration and LOS builders.
pub struct IndexedPriorityQueue {
	heap: BinaryHeap<(std::cmp::Reverse<Key>, FieldCell)>,
	present: [[bool; FIELD_RES_C]; FIELD_RES_R],
}

impl Default for IndexedPriorityQueue {
	fn default() -> Self {
		IndexedPriorityQueue {
			heap: BinaryHeap::new(),
			present: [[false; FIELD_RES_C]; FIELD_RES_R],
		}
	}
}

impl IndexedPriorityQueue {
	/// Create an empty queue
	pub fn new() -> Self {
		Self::default()
	}
	/// Push `cell` with the given `key`. Does not check for an existing entry - callers must
	/// consult [IndexedPriorityQueue::contains] first if the "no duplicate pushes" rule applies.
	pub fn push(&mut self, cell: FieldCell, key: f32) {
		self.heap.push((std::cmp::Reverse(Key(key)), cell));
		self.present[cell.row()][cell.column()] = true;
	}
	/// Pop the cell with the smallest key, or `None` if the queue is empty.
	pub fn pop(&mut self) -> Option<PoppedEntry> {
		let (std::cmp::Reverse(Key(key)), cell) = self.heap.pop()?;
		self.present[cell.row()][cell.column()] = false;
		Some(PoppedEntry { cell, key })
	}
	/// Whether `cell` is currently waiting in the frontier.
	pub fn contains(&self, cell: FieldCell) -> bool {
		self.present[cell.row()][cell.column()]
	}
	/// Number of entries currently queued.
	pub fn len(&self) -> usize {
		self.heap.len()
	}
	/// Whether the queue has no entries
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn pops_minimum_first() {
		let mut q = IndexedPriorityQueue::new();
		q.push(FieldCell::new(0, 0), 5.0);
		q.push(FieldCell::new(1, 1), 1.0);
		q.push(FieldCell::new(2, 2), 3.0);
		assert_eq!(q.pop().unwrap().cell, FieldCell::new(1, 1));
		assert_eq!(q.pop().unwrap().cell, FieldCell::new(2, 2));
		assert_eq!(q.pop().unwrap().cell, FieldCell::new(0, 0));
		assert!(q.pop().is_none());
	}
	#[test]
	fn contains_tracks_membership() {
		let mut q = IndexedPriorityQueue::new();
		let cell = FieldCell::new(3, 3);
		assert!(!q.contains(cell));
		q.push(cell, 2.0);
		assert!(q.contains(cell));
		q.pop();
		assert!(!q.contains(cell));
	}
}
</content>
