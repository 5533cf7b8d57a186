//! Key lookup: exact search and lower bound.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::TreeMap;
use super::cursor::Cursor;
use super::node::{Link, Side};

impl<K: Ord, V> TreeMap<K, V> {
    /// Descends from the root and returns the node holding `key`.
    pub(crate) fn find_node<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }

    /// Returns the node with the smallest key that is not less than `key`.
    pub(crate) fn lower_bound_node<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            if node.key.borrow() < key {
                current = node.right;
            } else {
                candidate = Some(index);
                current = node.left;
            }
        }
        candidate
    }

    /// Returns a cursor at the entry for `key`, or the end cursor if the key is absent.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "one"), (2, "two")]);
    /// assert_eq!(map.find(&2).entry(), Some((2, "two")));
    /// assert_eq!(map.find(&3), map.end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key)
            .map_or_else(|| self.end(), |index| Cursor::new(self, Some(index), false))
    }

    /// Returns a cursor at the smallest key that is greater than or equal to `key`,
    /// or the end cursor if every key is smaller.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map: TreeMap<i32, ()> = [1, 3, 5, 7].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(map.lower_bound(&4).key(), Some(&5));
    /// assert_eq!(map.lower_bound(&7).key(), Some(&7));
    /// assert_eq!(map.lower_bound(&8), map.end());
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lower_bound_node(key)
            .map_or_else(|| self.end(), |index| Cursor::new(self, Some(index), false))
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map = TreeMap::from([("hello".to_string(), 42)]);
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|index| &self.arena[index].value)
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|index| {
            let node = &self.arena[index];
            (&node.key, &node.value)
        })
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, 10)]);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key)
            .map(|index| &mut self.arena[index].value)
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }
}

impl<K, V> TreeMap<K, V> {
    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map = TreeMap::from([(3, "three"), (1, "one"), (2, "two")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"one")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.edge(Side::Left).map(|index| {
            let node = &self.arena[index];
            (&node.key, &node.value)
        })
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.edge(Side::Right).map(|index| {
            let node = &self.arena[index];
            (&node.key, &node.value)
        })
    }
}
