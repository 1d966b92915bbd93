// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered obstacle sequence.
//!
//! A doubly-linked chain stored in a slot arena. Slot `0` is the head sentinel
//! and slot `1` the tail sentinel; neither is ever removed. The chain is empty
//! iff `head.next == tail` (and then `tail.prev == head`).
//!
//! Iteration follows link order, which is insertion order unless
//! [`Sequence::insert`] placed an item earlier. The order matters to the
//! particle resolver: later obstacles overwrite earlier ones when both claim
//! the same contact side.
//!
//! Removed slots go on a free list and bump their generation, so a
//! [`NodeHandle`] taken before removal is rejected afterwards instead of
//! aliasing whatever item reuses the slot.

use crate::error::CoreError;

const HEAD: usize = 0;
const TAIL: usize = 1;

/// Generation-checked reference to a node of one [`Sequence`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    slot: usize,
    generation: u32,
}

/// Disposal policy invoked for every item a removal, clear, or destroy call
/// drops out of the sequence.
///
/// Closures `FnMut(T)` are policies; [`DropItems`] simply drops.
pub trait Disposer<T> {
    /// Takes ownership of a removed item.
    fn dispose(&mut self, item: T);
}

impl<T, F> Disposer<T> for F
where
    F: FnMut(T),
{
    fn dispose(&mut self, item: T) {
        self(item);
    }
}

/// Policy that drops removed items.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropItems;

impl<T> Disposer<T> for DropItems {
    fn dispose(&mut self, item: T) {
        drop(item);
    }
}

#[derive(Debug)]
struct Node<T> {
    /// `None` for sentinels, free slots, and items lifted by
    /// [`Sequence::update_detached`].
    item: Option<T>,
    prev: usize,
    next: usize,
    generation: u32,
    linked: bool,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            item: None,
            prev: HEAD,
            next: TAIL,
            generation: 0,
            linked: false,
        }
    }
}

/// Sentinel-bounded doubly-linked sequence with O(1) append and
/// remove-by-handle and O(n) indexed access.
#[derive(Debug)]
pub struct Sequence<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence (just the two sentinels).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel(), Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Reserves storage for `additional` more items, reporting allocation
    /// failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), CoreError> {
        let recycled = self.free.len();
        self.nodes
            .try_reserve(additional.saturating_sub(recycled))?;
        Ok(())
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no items.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.nodes[HEAD].next == TAIL);
        self.len == 0
    }

    /// Appends `item` after the last node.
    pub fn push(&mut self, item: T) -> NodeHandle {
        let slot = self.alloc(item);
        self.link_before(TAIL, slot);
        self.handle(slot)
    }

    /// Inserts `item` so that it ends up at `index`, shifting the item that
    /// was there (and everything after it) back by one.
    ///
    /// `index` must address an existing item (`0..len`); use [`Sequence::push`]
    /// to append.
    pub fn insert(&mut self, index: usize, item: T) -> Result<NodeHandle, CoreError> {
        let at = self.slot_at(index)?;
        let slot = self.alloc(item);
        self.link_before(at, slot);
        Ok(self.handle(slot))
    }

    /// Removes the item at `index` and hands it back to the caller.
    pub fn remove(&mut self, index: usize) -> Result<T, CoreError> {
        let slot = self.slot_at(index)?;
        self.unlink(slot).ok_or(CoreError::StaleHandle)
    }

    /// Removes the item at `index`, routing it through `disposer`.
    pub fn remove_with<D>(&mut self, index: usize, disposer: &mut D) -> Result<(), CoreError>
    where
        D: Disposer<T>,
    {
        let item = self.remove(index)?;
        disposer.dispose(item);
        Ok(())
    }

    /// Removes the node behind `handle` in O(1) and hands its item back.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<T, CoreError> {
        let slot = self.check(handle)?;
        self.unlink(slot).ok_or(CoreError::StaleHandle)
    }

    /// Removes the node behind `handle`, routing its item through `disposer`.
    pub fn remove_node_with<D>(
        &mut self,
        handle: NodeHandle,
        disposer: &mut D,
    ) -> Result<(), CoreError>
    where
        D: Disposer<T>,
    {
        let item = self.remove_node(handle)?;
        disposer.dispose(item);
        Ok(())
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CoreError> {
        let slot = self.slot_at(index)?;
        self.nodes[slot].item.as_ref().ok_or(CoreError::StaleHandle)
    }

    /// Returns the item at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CoreError> {
        let slot = self.slot_at(index)?;
        self.nodes[slot].item.as_mut().ok_or(CoreError::StaleHandle)
    }

    /// Returns the item behind `handle`, if it is still live.
    pub fn get_node(&self, handle: NodeHandle) -> Option<&T> {
        let slot = self.check(handle).ok()?;
        self.nodes[slot].item.as_ref()
    }

    /// Returns the item behind `handle` mutably, if it is still live.
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let slot = self.check(handle).ok()?;
        self.nodes[slot].item.as_mut()
    }

    /// Returns `true` if `handle` refers to a live node of this sequence.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.check(handle).is_ok()
    }

    /// Handle of the node at `index`.
    pub fn handle_at(&self, index: usize) -> Result<NodeHandle, CoreError> {
        self.slot_at(index).map(|slot| self.handle(slot))
    }

    /// Current index of the node behind `handle` (O(n)).
    pub fn index_of(&self, handle: NodeHandle) -> Option<usize> {
        let target = self.check(handle).ok()?;
        let mut slot = self.nodes[HEAD].next;
        let mut index = 0;
        while slot != TAIL {
            if slot == target {
                return Some(index);
            }
            slot = self.nodes[slot].next;
            index += 1;
        }
        None
    }

    /// Handle of the first node, if any.
    pub fn first_handle(&self) -> Option<NodeHandle> {
        let slot = self.nodes[HEAD].next;
        (slot != TAIL).then(|| self.handle(slot))
    }

    /// Handle of the node following `handle`, if any.
    ///
    /// Lets callers walk the chain while mutating items between steps.
    pub fn next_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let slot = self.check(handle).ok()?;
        let next = self.nodes[slot].next;
        (next != TAIL).then(|| self.handle(next))
    }

    /// Removes every item, dropping it.
    pub fn clear(&mut self) {
        self.clear_with(&mut DropItems);
    }

    /// Removes every item in order, routing each through `disposer`.
    ///
    /// Clearing an empty sequence is a no-op.
    pub fn clear_with<D>(&mut self, disposer: &mut D)
    where
        D: Disposer<T>,
    {
        let mut slot = self.nodes[HEAD].next;
        while slot != TAIL {
            let next = self.nodes[slot].next;
            if let Some(item) = self.unlink(slot) {
                disposer.dispose(item);
            }
            slot = next;
        }
        debug_assert!(self.nodes[HEAD].next == TAIL && self.nodes[TAIL].prev == HEAD);
    }

    /// Consumes the sequence, dropping every item in order.
    pub fn destroy(self) {
        self.destroy_with(&mut DropItems);
    }

    /// Consumes the sequence, routing every item through `disposer` in order.
    pub fn destroy_with<D>(mut self, disposer: &mut D)
    where
        D: Disposer<T>,
    {
        self.clear_with(disposer);
    }

    /// Iterates items in link order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            slot: self.nodes[HEAD].next,
        }
    }

    /// Visits every item mutably in link order.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(NodeHandle, &mut T),
    {
        let mut slot = self.nodes[HEAD].next;
        while slot != TAIL {
            let handle = self.handle(slot);
            let next = self.nodes[slot].next;
            if let Some(item) = self.nodes[slot].item.as_mut() {
                f(handle, item);
            }
            slot = next;
        }
    }

    /// Lifts the item behind `handle` out of the sequence, runs `f` with the
    /// item and a shared view of the rest, then puts the item back in place.
    ///
    /// While detached the item is skipped by [`Sequence::iter`], so a particle
    /// stored in the sequence can be moved against its siblings.
    pub fn update_detached<R, F>(&mut self, handle: NodeHandle, f: F) -> Result<R, CoreError>
    where
        F: FnOnce(&mut T, &Self) -> R,
    {
        let slot = self.check(handle)?;
        let mut item = self.nodes[slot].item.take().ok_or(CoreError::StaleHandle)?;
        let out = f(&mut item, self);
        self.nodes[slot].item = Some(item);
        Ok(out)
    }

    fn handle(&self, slot: usize) -> NodeHandle {
        NodeHandle {
            slot,
            generation: self.nodes[slot].generation,
        }
    }

    fn check(&self, handle: NodeHandle) -> Result<usize, CoreError> {
        match self.nodes.get(handle.slot) {
            Some(node) if node.linked && node.generation == handle.generation => Ok(handle.slot),
            _ => Err(CoreError::StaleHandle),
        }
    }

    fn slot_at(&self, index: usize) -> Result<usize, CoreError> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // Walk from whichever sentinel is closer.
        if index < self.len / 2 {
            let mut slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
            Ok(slot)
        } else {
            let mut slot = self.nodes[TAIL].prev;
            for _ in index + 1..self.len {
                slot = self.nodes[slot].prev;
            }
            Ok(slot)
        }
    }

    fn alloc(&mut self, item: T) -> usize {
        if let Some(slot) = self.free.pop() {
            let node = &mut self.nodes[slot];
            node.item = Some(item);
            node.linked = true;
            slot
        } else {
            self.nodes.push(Node {
                item: Some(item),
                prev: HEAD,
                next: TAIL,
                generation: 0,
                linked: true,
            });
            self.nodes.len() - 1
        }
    }

    fn link_before(&mut self, at: usize, slot: usize) {
        let prev = self.nodes[at].prev;
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = at;
        self.nodes[prev].next = slot;
        self.nodes[at].prev = slot;
        self.len += 1;
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        let node = &mut self.nodes[slot];
        node.linked = false;
        node.generation = node.generation.wrapping_add(1);
        self.free.push(slot);
        self.len -= 1;
        debug_assert_eq!(self.len == 0, self.nodes[HEAD].next == TAIL);
        self.nodes[slot].item.take()
    }
}

/// Link-order iterator over a [`Sequence`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    slot: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            slot: self.slot,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot != TAIL {
            let node = &self.seq.nodes[self.slot];
            self.slot = node.next;
            if let Some(item) = node.item.as_ref() {
                return Some(item);
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        for item in iter {
            seq.push(item);
        }
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sequence, HEAD, TAIL};

    fn links_consistent<T>(seq: &Sequence<T>) -> bool {
        let mut count = 0;
        let mut slot = seq.nodes[HEAD].next;
        let mut prev = HEAD;
        while slot != TAIL {
            if seq.nodes[slot].prev != prev {
                return false;
            }
            prev = slot;
            slot = seq.nodes[slot].next;
            count += 1;
        }
        seq.nodes[TAIL].prev == prev && count == seq.len
    }

    #[test]
    fn sentinels_link_to_each_other_when_empty() {
        let mut seq = Sequence::new();
        assert_eq!(seq.nodes[HEAD].next, TAIL);
        assert_eq!(seq.nodes[TAIL].prev, HEAD);
        seq.push(1);
        seq.push(2);
        assert_ne!(seq.nodes[HEAD].next, TAIL);
        seq.clear();
        assert_eq!(seq.nodes[HEAD].next, TAIL);
        assert_eq!(seq.nodes[TAIL].prev, HEAD);
        assert!(links_consistent(&seq));
    }

    #[test]
    fn links_stay_consistent_through_mixed_edits() {
        let mut seq: Sequence<u32> = (0..8).collect();
        assert!(links_consistent(&seq));
        seq.insert(3, 100).ok();
        seq.remove(0).ok();
        let h = seq.handle_at(5).ok();
        if let Some(h) = h {
            seq.remove_node(h).ok();
        }
        seq.push(7);
        seq.insert(0, 42).ok();
        assert!(links_consistent(&seq));
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut seq = Sequence::new();
        seq.push('a');
        seq.push('b');
        seq.remove(0).ok();
        let slots_before = seq.nodes.len();
        seq.push('c');
        assert_eq!(seq.nodes.len(), slots_before);
        assert!(links_consistent(&seq));
    }
}
