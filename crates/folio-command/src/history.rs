//! Linear undo/redo over page snapshots

use crate::transforms::Transform;
use folio_library::SectionNode;
use std::sync::Arc;
use tracing::{debug, warn};

/// An immutable page. Cloning shares the sections.
pub type Snapshot = Arc<[SectionNode]>;

#[derive(Debug, Clone)]
struct Step {
    /// Label of the transform between this snapshot and its neighbour
    label: String,
    page: Snapshot,
}

/// Past, present and future pages of one editing session.
///
/// Applying a transform clears the redo branch. Undo and redo only move
/// snapshots between the stacks, so each step is O(1). The undo stack is
/// unbounded unless [`History::with_max_depth`] sets a limit.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Step>,
    present: Snapshot,
    future: Vec<Step>,
    max_depth: Option<usize>,
}

impl History {
    pub fn new(initial: Vec<SectionNode>) -> Self {
        Self {
            past: Vec::new(),
            present: initial.into(),
            future: Vec::new(),
            max_depth: None,
        }
    }

    /// Bound the undo stack; zero keeps no undo steps at all
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self.trim();
        self
    }

    pub fn current(&self) -> &[SectionNode] {
        &self.present
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.present)
    }

    /// Apply `transform` to the present page, making the result current
    pub fn apply(&mut self, transform: &Transform) -> Snapshot {
        let next: Snapshot = transform.apply(&self.present).into();
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(Step {
            label: transform.label().to_string(),
            page: previous,
        });
        self.future.clear();
        self.trim();
        debug!(label = %transform.label(), depth = self.past.len(), "applied edit");
        self.snapshot()
    }

    /// Step back one edit, returning the restored page
    pub fn undo(&mut self) -> Option<Snapshot> {
        let Some(step) = self.past.pop() else {
            warn!("nothing to undo");
            return None;
        };
        let undone = std::mem::replace(&mut self.present, step.page);
        self.future.push(Step {
            label: step.label,
            page: undone,
        });
        Some(self.snapshot())
    }

    /// Re-apply the last undone edit, returning the restored page
    pub fn redo(&mut self) -> Option<Snapshot> {
        let Some(step) = self.future.pop() else {
            warn!("nothing to redo");
            return None;
        };
        let previous = std::mem::replace(&mut self.present, step.page);
        self.past.push(Step {
            label: step.label,
            page: previous,
        });
        Some(self.snapshot())
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Label of the edit `undo` would revert
    pub fn undo_label(&self) -> Option<&str> {
        self.past.last().map(|s| s.label.as_str())
    }

    /// Label of the edit `redo` would re-apply
    pub fn redo_label(&self) -> Option<&str> {
        self.future.last().map(|s| s.label.as_str())
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn trim(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        if self.past.len() > max_depth {
            let excess = self.past.len() - max_depth;
            self.past.drain(..excess);
        }
    }
}
