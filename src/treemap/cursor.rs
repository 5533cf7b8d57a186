//! Bidirectional cursors over a [`TreeMap`].
//!
//! A [`Cursor`] is a position in the in-order sequence: a node plus an
//! `exhausted` flag. The end position keeps the maximum node with the flag
//! set, so that stepping back from the end yields the maximum again. Moving
//! a cursor follows parent links and needs no other storage.

use std::fmt;
use std::ptr;

use super::TreeMap;
use super::node::{Link, Side};
use crate::error::CursorError;

/// Message for a cursor advanced from the end position.
const PAST_END_PANIC_MESSAGE: &str = "cursor moved past the end";

/// Message for a cursor moved back from the first entry.
const BEFORE_BEGIN_PANIC_MESSAGE: &str = "cursor moved before the first entry";

/// A position within the in-order sequence of a [`TreeMap`].
///
/// Cursors are `Copy`: a post-increment is simply a copy taken before
/// calling [`move_next`](Self::move_next). Two cursors are equal when they
/// belong to the same map and point at the same position.
///
/// # Examples
///
/// ```rust
/// use rbtree_map::TreeMap;
///
/// let map = TreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
///
/// let mut cursor = map.begin();
/// let mut keys = Vec::new();
/// while cursor != map.end() {
///     keys.push(*cursor.key().unwrap());
///     cursor.move_next();
/// }
/// assert_eq!(keys, vec![1, 2, 3]);
///
/// // Stepping back from the end yields the maximum.
/// cursor.move_prev();
/// assert_eq!(cursor.entry(), Some((3, "three")));
/// ```
pub struct Cursor<'a, K, V> {
    map: &'a TreeMap<K, V>,
    node: Link,
    exhausted: bool,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) const fn new(map: &'a TreeMap<K, V>, node: Link, exhausted: bool) -> Self {
        Self {
            map,
            node,
            exhausted,
        }
    }

    /// Returns `true` if the cursor is at the end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.exhausted
    }

    /// Returns references to the entry under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        if self.exhausted {
            return None;
        }
        self.node.map(|index| {
            let node = &self.map.arena[index];
            (&node.key, &node.value)
        })
    }

    /// Returns the key under the cursor, or `None` at the end.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(key, _)| key)
    }

    /// Returns the value under the cursor, or `None` at the end.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, value)| value)
    }

    /// Returns an owned snapshot of the entry under the cursor, or `None` at the end.
    ///
    /// The snapshot is independent of the map.
    #[must_use]
    pub fn entry(&self) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.get().map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Moves to the next entry, or to the end position after the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::PastEnd`] if the cursor is already at the end.
    /// The cursor is left unchanged.
    pub fn try_move_next(&mut self) -> Result<(), CursorError> {
        let Some(node) = self.node.filter(|_| !self.exhausted) else {
            return Err(CursorError::PastEnd);
        };
        match self.map.step(node, Side::Right) {
            Some(next) => self.node = Some(next),
            None => self.exhausted = true,
        }
        Ok(())
    }

    /// Moves to the previous entry. From the end position this is the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::BeforeBegin`] if the cursor is at the first entry
    /// or the map is empty. The cursor is left unchanged.
    pub fn try_move_prev(&mut self) -> Result<(), CursorError> {
        let Some(node) = self.node else {
            return Err(CursorError::BeforeBegin);
        };
        if self.exhausted {
            self.exhausted = false;
            return Ok(());
        }
        let previous = self
            .map
            .step(node, Side::Left)
            .ok_or(CursorError::BeforeBegin)?;
        self.node = Some(previous);
        Ok(())
    }

    /// Moves to the next entry and returns the cursor for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end. Use
    /// [`try_move_next`](Self::try_move_next) for a checked variant.
    pub fn move_next(&mut self) -> &mut Self {
        if self.try_move_next().is_err() {
            panic!("{PAST_END_PANIC_MESSAGE}");
        }
        self
    }

    /// Moves to the previous entry and returns the cursor for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the first entry or the map is empty. Use
    /// [`try_move_prev`](Self::try_move_prev) for a checked variant.
    pub fn move_prev(&mut self) -> &mut Self {
        if self.try_move_prev().is_err() {
            panic!("{BEFORE_BEGIN_PANIC_MESSAGE}");
        }
        self
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.map, other.map) && self.node == other.node && self.exhausted == other.exhausted
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some((key, value)) => formatter
                .debug_struct("Cursor")
                .field("key", key)
                .field("value", value)
                .finish(),
            None => formatter.write_str("Cursor(end)"),
        }
    }
}

impl<K, V> TreeMap<K, V> {
    /// Returns a cursor at the entry with the smallest key.
    ///
    /// For an empty map this equals [`end`](Self::end).
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, K, V> {
        match self.edge(Side::Left) {
            Some(first) => Cursor::new(self, Some(first), false),
            None => self.end(),
        }
    }

    /// Returns the end cursor: one past the entry with the largest key.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, self.edge(Side::Right), true)
    }
}
