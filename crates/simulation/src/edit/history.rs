use std::collections::VecDeque;

use crate::config::MAX_HISTORY;
use crate::grid::Cell;

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Previous content of one cell touched by a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellChange {
    pub x: i32,
    pub y: i32,
    pub previous: Option<Cell>,
}

/// All cell changes made by a single stroke, in application order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBatch {
    changes: Vec<CellChange>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, x: i32, y: i32, previous: Option<Cell>) {
        self.changes.push(CellChange { x, y, previous });
    }

    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// History stack
// ---------------------------------------------------------------------------

/// Stroke history, most recent at the back. Holds at most `capacity` batches.
#[derive(Debug, Clone, PartialEq)]
pub struct EditHistory {
    batches: VecDeque<EditBatch>,
    capacity: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl EditHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            batches: VecDeque::with_capacity(capacity.min(MAX_HISTORY)),
            capacity: capacity.max(1),
        }
    }

    /// Push a batch, dropping the oldest one if the stack is full.
    /// Empty batches are never stored.
    pub(crate) fn push(&mut self, batch: EditBatch) {
        if batch.is_empty() {
            return;
        }
        if self.batches.len() >= self.capacity {
            self.batches.pop_front();
        }
        self.batches.push_back(batch);
    }

    pub(crate) fn pop(&mut self) -> Option<EditBatch> {
        self.batches.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent batch, if any.
    pub fn last(&self) -> Option<&EditBatch> {
        self.batches.back()
    }
}
