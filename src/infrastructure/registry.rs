// SPDX-License-Identifier: MPL-2.0
//! Generational slot map behind the browser node handles.
//!
//! The browser page hands out a [`NodeHandle`] for every node a component
//! touches. Slots are recycled once a node is released, and each release bumps
//! the slot's generation so handles still held by pending timers resolve to
//! nothing instead of to whichever node reuses the slot.

use crate::domain::ui::NodeHandle;

/// Handle that never resolves. Slot `u32::MAX` is never issued.
pub const UNREGISTERED: NodeHandle = NodeHandle::from_parts(u32::MAX, u32::MAX);

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Values addressed by generation-checked handles.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }
}

impl<T> HandleRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, reusing a released slot when one is available.
    ///
    /// Returns `None` only when every slot index is taken.
    pub fn insert(&mut self, value: T) -> Option<NodeHandle> {
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index as usize) {
                slot.value = Some(value);
                self.live += 1;
                return Some(NodeHandle::from_parts(index, slot.generation));
            }
        }
        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|index| *index < u32::MAX)?;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        self.live += 1;
        Some(NodeHandle::from_parts(index, 0))
    }

    /// The value behind a handle, unless it was released since.
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Current handle for an occupied slot.
    #[must_use]
    pub fn handle_at(&self, index: u32) -> Option<NodeHandle> {
        let slot = self.slots.get(index as usize)?;
        slot.value
            .as_ref()
            .map(|_| NodeHandle::from_parts(index, slot.generation))
    }

    /// Frees the slot behind `handle` and returns its value.
    pub fn release(&mut self, handle: NodeHandle) -> Option<T> {
        self.get(handle)?;
        self.vacate(handle.index())
    }

    /// Releases every value `keep` rejects and returns them.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        let doomed: Vec<u32> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.value.as_ref().is_some_and(|value| !keep(value)))
            .filter_map(|(index, _)| u32::try_from(index).ok())
            .collect();
        doomed
            .into_iter()
            .filter_map(|index| self.vacate(index))
            .collect()
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn vacate(&mut self, index: u32) -> Option<T> {
        let slot = self.slots.get_mut(index as usize)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_values_resolve_until_released() {
        let mut registry = HandleRegistry::new();
        let table = registry.insert("table").expect("slot");
        assert_eq!(registry.get(table), Some(&"table"));

        assert_eq!(registry.release(table), Some("table"));
        assert_eq!(registry.get(table), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn released_slots_are_reused_under_a_new_generation() {
        let mut registry = HandleRegistry::new();
        let toast = registry.insert("toast").expect("slot");
        registry.release(toast);

        let card = registry.insert("card").expect("slot");
        assert_eq!(card.index(), toast.index());
        assert_ne!(card, toast);
        assert_eq!(registry.get(toast), None);
        assert_eq!(registry.get(card), Some(&"card"));
    }

    #[test]
    fn stale_handle_cannot_release_the_new_occupant() {
        let mut registry = HandleRegistry::new();
        let old = registry.insert(1).expect("slot");
        registry.release(old);
        let new = registry.insert(2).expect("slot");

        assert_eq!(registry.release(old), None);
        assert_eq!(registry.get(new), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn retain_releases_rejected_values() {
        let mut registry = HandleRegistry::new();
        let kept = registry.insert(("result", true)).expect("slot");
        let dropped = registry.insert(("old table", false)).expect("slot");

        let released = registry.retain(|(_, connected)| *connected);

        assert_eq!(released, vec![("old table", false)]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(kept).is_some());
        assert!(registry.get(dropped).is_none());
    }

    #[test]
    fn registry_size_stays_bounded_under_churn() {
        let mut registry = HandleRegistry::new();
        for round in 0..1_000 {
            let handle = registry.insert(round).expect("slot");
            registry.release(handle);
        }
        assert!(registry.is_empty());
        assert_eq!(registry.insert(0).map(NodeHandle::index), Some(0));
    }

    #[test]
    fn handle_at_reports_the_current_generation() {
        let mut registry = HandleRegistry::new();
        let first = registry.insert('a').expect("slot");
        registry.release(first);
        let second = registry.insert('b').expect("slot");

        assert_eq!(registry.handle_at(second.index()), Some(second));
        registry.release(second);
        assert_eq!(registry.handle_at(second.index()), None);
    }

    #[test]
    fn unregistered_handle_never_resolves() {
        let mut registry = HandleRegistry::new();
        registry.insert(());
        assert_eq!(registry.get(UNREGISTERED), None);
    }
}
