//! Brush edit engine and bounded undo history.
//!
//! Every paint stroke becomes one [`EditBatch`] holding the previous value of
//! each cell it changed, so a single undo restores the whole stroke. The
//! history is only mutated through [`apply_brush`], [`undo_last`] and
//! [`hard_clear`].

pub mod brush;
pub mod history;


pub use brush::{apply_brush, brush_footprint, hard_clear, undo_last, BrushStroke, EditOutcome};
pub use history::{CellChange, EditBatch, EditHistory};
