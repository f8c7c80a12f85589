//! Explicit traversal over an [`OrderedMap`].
//!
//! A [`Cursor`] walks a map front to back with a "first / advance" protocol
//! and hands out caller-owned copies of keys, made with the map's
//! [`EntrySemantics::copy_key`]. Each cursor holds its own position, so any
//! number of traversals of one map can run side by side.
//!
//! A cursor borrows its map. While one is alive the map cannot be mutated,
//! which rules out traversals that skip, repeat, or touch released entries.
//!
//! # States
//!
//! ```text
//!              first (empty map)
//!             +-----------------+
//!             v                 |
//!      Unpositioned ---first---> At(lowest) ---advance---> At(successor)
//!                                   |                          |
//!                                   +--advance at tail--> Exhausted(last)
//! ```
//!
//! `first` restarts from any state. `advance` on an unpositioned or exhausted
//! cursor returns `None`.
//!
//! # Examples
//!
//! ```rust
//! use ordered_map::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.put(&2, &"two").unwrap();
//! map.put(&1, &"one").unwrap();
//!
//! let mut cursor = map.cursor();
//! let mut seen = Vec::new();
//! let mut key = cursor.first();
//! while let Some(Ok(owned_key)) = key {
//!     seen.push((owned_key, *map.get(&owned_key).unwrap()));
//!     key = cursor.advance();
//! }
//!
//! assert_eq!(seen, vec![(1, "one"), (2, "two")]);
//! assert!(cursor.is_exhausted());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::error::{MapError, MapResult};
use super::map::{Node, OrderedMap};
use super::semantics::EntrySemantics;

enum Position<'a, K, V> {
    Unpositioned,
    At(&'a Node<K, V>),
    Exhausted(&'a Node<K, V>),
}

impl<K, V> Clone for Position<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Position<'_, K, V> {}

// =============================================================================
// Cursor
// =============================================================================

/// A traversal position over one [`OrderedMap`].
///
/// Obtained from [`OrderedMap::cursor`]. A fresh cursor is unpositioned:
/// call [`first`](Self::first) to start, then [`advance`](Self::advance)
/// until it returns `None`.
pub struct Cursor<'a, K, V, S: EntrySemantics<K, V>> {
    map: &'a OrderedMap<K, V, S>,
    position: Position<'a, K, V>,
}

impl<'a, K, V, S: EntrySemantics<K, V>> Cursor<'a, K, V, S> {
    pub(super) const fn new(map: &'a OrderedMap<K, V, S>) -> Self {
        Self {
            map,
            position: Position::Unpositioned,
        }
    }

    /// Moves to the lowest-keyed entry and returns a copy of its key.
    ///
    /// On an empty map the cursor becomes unpositioned and `None` is
    /// returned.
    ///
    /// A copy failure yields `Some(Err(MapError::OutOfMemory))`; the cursor is
    /// still moved.
    pub fn first(&mut self) -> Option<MapResult<K>> {
        let map = self.map;
        if let Some(node) = map.head_node() {
            self.position = Position::At(node);
            Some(self.copy_out(node))
        } else {
            self.position = Position::Unpositioned;
            None
        }
    }

    /// Moves to the next entry in ascending key order and returns a copy of
    /// its key.
    ///
    /// Returns `None` when the cursor was never positioned. At the end of the
    /// map the cursor stays on the last entry, becomes exhausted and keeps
    /// returning `None`.
    pub fn advance(&mut self) -> Option<MapResult<K>> {
        match self.position {
            Position::Unpositioned | Position::Exhausted(_) => None,
            Position::At(node) => {
                if let Some(successor) = node.next.as_deref() {
                    self.position = Position::At(successor);
                    Some(self.copy_out(successor))
                } else {
                    self.position = Position::Exhausted(node);
                    None
                }
            }
        }
    }

    /// Returns the entry under the cursor, without copying.
    ///
    /// An exhausted cursor still reports the last entry.
    pub const fn current(&self) -> Option<(&'a K, &'a V)> {
        match self.position {
            Position::Unpositioned => None,
            Position::At(node) | Position::Exhausted(node) => Some((&node.key, &node.value)),
        }
    }

    /// Returns `true` once [`advance`](Self::advance) has run past the last
    /// entry.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.position, Position::Exhausted(_))
    }

    /// Returns `true` if the cursor is on an entry that has not been passed.
    pub const fn is_positioned(&self) -> bool {
        matches!(self.position, Position::At(_))
    }

    fn copy_out(&self, node: &Node<K, V>) -> MapResult<K> {
        self.map.semantics().copy_key(&node.key).map_err(|failure| {
            tracing::warn!("key copy failed during traversal");
            MapError::from(failure)
        })
    }
}

impl<K, V, S: EntrySemantics<K, V>> Clone for Cursor<'_, K, V, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            position: self.position,
        }
    }
}

impl<K, V, S: EntrySemantics<K, V>> fmt::Debug for Cursor<'_, K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.position {
            Position::Unpositioned => "Unpositioned",
            Position::At(_) => "At",
            Position::Exhausted(_) => "Exhausted",
        };
        formatter
            .debug_struct("Cursor")
            .field("state", &state)
            .field("map_len", &self.map.len())
            .finish()
    }
}

// =============================================================================
// CopiedKeys
// =============================================================================

/// An iterator over caller-owned key copies, driven by a [`Cursor`].
///
/// Created by [`OrderedMap::copied_keys`].
pub struct CopiedKeys<'a, K, V, S: EntrySemantics<K, V>> {
    cursor: Cursor<'a, K, V, S>,
    started: bool,
}

impl<'a, K, V, S: EntrySemantics<K, V>> CopiedKeys<'a, K, V, S> {
    pub(super) const fn new(cursor: Cursor<'a, K, V, S>) -> Self {
        Self {
            cursor,
            started: false,
        }
    }
}

impl<K, V, S: EntrySemantics<K, V>> Iterator for CopiedKeys<'_, K, V, S> {
    type Item = MapResult<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.cursor.advance()
        } else {
            self.started = true;
            self.cursor.first()
        }
    }
}

impl<K, V, S: EntrySemantics<K, V>> FusedIterator for CopiedKeys<'_, K, V, S> {}

// =============================================================================
// Tests
// =============================================================================
