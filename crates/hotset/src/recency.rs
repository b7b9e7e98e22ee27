//! Recency ordering over arena entries
//!
//! A doubly linked list expressed through the prev/next handles stored on
//! each entry. The list tracks only the front (most recently used) and back
//! (least recently used) handles; it knows nothing about keys or the index.

use crate::entry::EntryArena;

/// Strict most-recent-to-least-recent ordering of cache entries.
pub(crate) struct RecencyList {
    front: Option<usize>,
    back: Option<usize>,
}

impl RecencyList {
    pub(crate) fn new() -> Self {
        Self {
            front: None,
            back: None,
        }
    }

    pub(crate) fn front(&self) -> Option<usize> {
        self.front
    }

    pub(crate) fn back(&self) -> Option<usize> {
        self.back
    }

    /// Make `id` the new front.
    ///
    /// Handles entries already in the list (including the current back and
    /// interior entries, which are first spliced out of their old position)
    /// as well as freshly allocated entries with no links yet.
    pub(crate) fn promote_to_front<K, V>(&mut self, arena: &mut EntryArena<K, V>, id: usize) {
        if self.front == Some(id) {
            return; // already at front
        }

        let front_id = match self.front {
            Some(front_id) => front_id,
            None => {
                // empty list: sole entry is both front and back
                self.front = Some(id);
                self.back = Some(id);
                return;
            }
        };

        if self.front == self.back {
            // the lone resident becomes the back
            if let Some(entry) = arena.get_mut(front_id) {
                entry.prev = Some(id);
            }
            if let Some(entry) = arena.get_mut(id) {
                entry.next = Some(front_id);
            }
            self.front = Some(id);
            return;
        }

        if self.back == Some(id) {
            self.remove_back(arena);
        } else {
            // interior entry: splice it out of its old position first
            Self::clear_bindings(arena, id);
        }

        if let Some(front_id) = self.front {
            if let Some(entry) = arena.get_mut(front_id) {
                entry.prev = Some(id);
            }
            if let Some(entry) = arena.get_mut(id) {
                entry.next = Some(front_id);
            }
        }
        self.front = Some(id);
    }

    /// Detach the current back entry. The entry stays in the arena; deleting
    /// it from the index is the cache's job.
    pub(crate) fn remove_back<K, V>(&mut self, arena: &mut EntryArena<K, V>) {
        let back_id = match self.back {
            Some(back_id) => back_id,
            None => return,
        };

        if self.front == self.back {
            self.front = None;
            self.back = None;
            return;
        }

        self.back = arena.get(back_id).and_then(|entry| entry.prev);
        Self::clear_bindings(arena, back_id);
    }

    /// Detach an arbitrary entry, fixing up front/back as needed.
    pub(crate) fn remove<K, V>(&mut self, arena: &mut EntryArena<K, V>, id: usize) {
        if self.back == Some(id) {
            self.remove_back(arena);
            return;
        }

        if self.front == Some(id) {
            self.front = arena.get(id).and_then(|entry| entry.next);
        }
        Self::clear_bindings(arena, id);
    }

    /// Excise `id` from its neighbors' adjacency and clear its own links.
    ///
    /// The single splicing primitive: promotion and eviction both reduce to
    /// this plus relinking at the ends.
    pub(crate) fn clear_bindings<K, V>(arena: &mut EntryArena<K, V>, id: usize) {
        let (prev, next) = match arena.get(id) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        if let Some(prev_id) = prev {
            if let Some(entry) = arena.get_mut(prev_id) {
                entry.next = next;
            }
        }
        if let Some(next_id) = next {
            if let Some(entry) = arena.get_mut(next_id) {
                entry.prev = prev;
            }
        }
        if let Some(entry) = arena.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.front = None;
        self.back = None;
    }
}
