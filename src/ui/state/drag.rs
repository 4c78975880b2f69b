// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks which drop zones are lit while a file hovers over them.

use crate::domain::ui::NodeHandle;
use std::collections::BTreeSet;

/// Highlighted drop zones.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    highlighted: BTreeSet<NodeHandle>,
}

impl DragState {
    /// Marks a zone as highlighted. Returns `true` if it was not already.
    pub fn start(&mut self, zone: NodeHandle) -> bool {
        self.highlighted.insert(zone)
    }

    /// Clears a zone. Returns `true` if it was highlighted.
    pub fn stop(&mut self, zone: NodeHandle) -> bool {
        self.highlighted.remove(&zone)
    }

    #[must_use]
    pub fn is_dragging_over(&self, zone: NodeHandle) -> bool {
        self.highlighted.contains(&zone)
    }
}
