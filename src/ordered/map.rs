//! Ordered map on a sorted singly-linked list.
//!
//! This module provides [`OrderedMap`], a mutable key-value map that keeps its
//! entries in ascending key order at all times. There is no sort step: `put`
//! splices every new entry directly into its position.
//!
//! # Overview
//!
//! - O(n) get, put, remove (scans stop at the first greater key)
//! - O(1) len and `is_empty`
//! - O(n) deep copy
//!
//! Keys and values are never taken from the caller. `put` receives references
//! and stores duplicates made by the map's [`EntrySemantics`]; every stored
//! key and value is handed back to the semantics' free functions when its
//! entry goes away.
//!
//! # Examples
//!
//! ```rust
//! use ordered_map::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.put(&3, &"c").unwrap();
//! map.put(&1, &"a").unwrap();
//! map.put(&2, &"b").unwrap();
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! map.remove(&2).unwrap();
//! assert_eq!(map.get(&2), None);
//! assert_eq!(map.len(), 2);
//! ```
//!
//! # Internal Structure
//!
//! ```text
//! head -> [1: "a"] -> [2: "b"] -> [3: "c"] -> nil
//! ```
//!
//! Every link satisfies `compare(node.key, node.next.key) == Less`.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::cursor::{CopiedKeys, Cursor};
use super::error::{MapError, MapResult};
use super::semantics::{Callbacks, CompareFn, CopyFn, EntrySemantics, FreeFn, Natural};

// =============================================================================
// Node Definition
// =============================================================================

/// A link to the next node of the list.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Internal node structure: one owned entry and the rest of the list.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) next: Link<K, V>,
}

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// A mutable ordered map with caller-defined value semantics.
///
/// The semantics parameter `S` decides how keys are ordered and how keys and
/// values are copied and released. It defaults to [`Natural`], which uses
/// `Ord`, `Clone` and drop.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `get`       | O(n)       |
/// | `contains`  | O(n)       |
/// | `put`       | O(n)       |
/// | `remove`    | O(n)       |
/// | `clear`     | O(n)       |
/// | `deep_copy` | O(n)       |
/// | `len`       | O(1)       |
///
/// # Examples
///
/// ```rust
/// use ordered_map::ordered::OrderedMap;
///
/// let mut scores: OrderedMap<String, u32> = OrderedMap::new();
/// scores.put(&"bob".to_string(), &7).unwrap();
/// scores.put(&"alice".to_string(), &9).unwrap();
///
/// if let Some(score) = scores.get_mut(&"bob".to_string()) {
///     *score += 1;
/// }
///
/// let entries: Vec<(&String, &u32)> = scores.iter().collect();
/// assert_eq!(entries[0], (&"alice".to_string(), &9));
/// assert_eq!(entries[1], (&"bob".to_string(), &8));
/// ```
pub struct OrderedMap<K, V, S = Natural<K, V>>
where
    S: EntrySemantics<K, V>,
{
    /// First node of the sorted list.
    head: Link<K, V>,
    /// Number of entries.
    length: usize,
    /// Copy, compare and free behaviour, fixed for the map's lifetime.
    semantics: S,
}

impl<K: Clone + Ord, V: Clone> OrderedMap<K, V> {
    /// Creates an empty map with [`Natural`] semantics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_semantics(Natural::new())
    }
}

impl<K, V> OrderedMap<K, V, Callbacks<K, V>> {
    /// Creates an empty map from five callback functions.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NullArgument`] naming the first callback that is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::{CompareFn, CopyFailure, CopyFn, FreeFn, MapError, OrderedMap};
    /// use std::cmp::Ordering;
    /// use std::rc::Rc;
    ///
    /// fn copy_number(number: &i64) -> Result<i64, CopyFailure> {
    ///     Ok(*number)
    /// }
    ///
    /// fn compare_numbers(left: &i64, right: &i64) -> Ordering {
    ///     left.cmp(right)
    /// }
    ///
    /// let copy: CopyFn<i64> = Rc::new(copy_number);
    /// let free: FreeFn<i64> = Rc::new(drop::<i64>);
    /// let compare: CompareFn<i64> = Rc::new(compare_numbers);
    ///
    /// let map = OrderedMap::create(
    ///     Some(Rc::clone(&copy)),
    ///     Some(Rc::clone(&copy)),
    ///     Some(Rc::clone(&free)),
    ///     Some(Rc::clone(&free)),
    ///     Some(compare),
    /// );
    /// assert!(map.is_ok());
    ///
    /// let missing = OrderedMap::create(Some(Rc::clone(&copy)), Some(copy), Some(Rc::clone(&free)), Some(free), None);
    /// assert_eq!(missing.err(), Some(MapError::NullArgument { argument: "compare" }));
    /// ```
    pub fn create(
        copy_key: Option<CopyFn<K>>,
        copy_value: Option<CopyFn<V>>,
        free_key: Option<FreeFn<K>>,
        free_value: Option<FreeFn<V>>,
        compare: Option<CompareFn<K>>,
    ) -> MapResult<Self> {
        let callbacks = Callbacks::from_parts(copy_key, copy_value, free_key, free_value, compare)?;
        Ok(Self::with_semantics(callbacks))
    }
}

impl<K, V, S: EntrySemantics<K, V>> OrderedMap<K, V, S> {
    /// Creates an empty map bound to `semantics`.
    #[inline]
    #[must_use]
    pub const fn with_semantics(semantics: S) -> Self {
        Self {
            head: None,
            length: 0,
            semantics,
        }
    }

    /// Returns the semantics this map was created with.
    #[inline]
    pub const fn semantics(&self) -> &S {
        &self.semantics
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns a reference to the value stored under `key`.
    ///
    /// The reference borrows the map, so it cannot outlive the next mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(&1, &"one".to_string()).unwrap();
    /// assert_eq!(map.get(&1), Some(&"one".to_string()));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let semantics = &self.semantics;
        let mut link = self.head.as_deref_mut();
        while let Some(node) = link {
            match semantics.compare(&node.key, key) {
                Ordering::Less => link = node.next.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Returns `true` if some entry's key compares equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns the entry with the lowest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.head_node().map(|node| (&node.key, &node.value))
    }

    /// Returns the entry with the highest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.iter().last()
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            match self.semantics.compare(&node.key, key) {
                Ordering::Less => link = node.next.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => return None,
            }
        }
        None
    }

    pub(super) fn head_node(&self) -> Option<&Node<K, V>> {
        self.head.as_deref()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Stores a copy of `value` under `key`.
    ///
    /// If no entry has an equal key, copies of both `key` and `value` are
    /// spliced in before the first entry with a greater key. Otherwise only
    /// the value is copied; the previous value is released and the stored key
    /// is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfMemory`] if a copy fails. The map is then
    /// unchanged: a key copy made before a failing value copy is released, and
    /// a failing replacement keeps the old value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(&1, &"first").unwrap();
    /// map.put(&1, &"second").unwrap();
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&"second"));
    /// ```
    pub fn put(&mut self, key: &K, value: &V) -> MapResult<()> {
        let semantics = &self.semantics;
        let link = Self::seek_mut(semantics, &mut self.head, key);

        if let Some(node) = link
            .as_mut()
            .filter(|node| semantics.compare(&node.key, key) == Ordering::Equal)
        {
            let replacement = semantics.copy_value(value).map_err(|failure| {
                tracing::warn!(length = self.length, "value copy failed, previous value kept");
                MapError::from(failure)
            })?;
            let previous = std::mem::replace(&mut node.value, replacement);
            semantics.free_value(previous);
            tracing::debug!(length = self.length, "value replaced");
            return Ok(());
        }

        let (new_key, new_value) = Self::copy_entry(semantics, key, value)?;
        let next = link.take();
        *link = Some(Box::new(Node {
            key: new_key,
            value: new_value,
            next,
        }));
        self.length += 1;
        tracing::debug!(length = self.length, "entry inserted");
        Ok(())
    }

    /// Removes the entry whose key compares equal to `key`, releasing its key
    /// and value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ItemDoesNotExist`] if there is no such entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::{MapError, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(&1, &10).unwrap();
    ///
    /// assert_eq!(map.remove(&1), Ok(()));
    /// assert_eq!(map.remove(&1), Err(MapError::ItemDoesNotExist));
    /// ```
    pub fn remove(&mut self, key: &K) -> MapResult<()> {
        let semantics = &self.semantics;
        let link = Self::seek_mut(semantics, &mut self.head, key);

        match link.take() {
            Some(node) if semantics.compare(&node.key, key) == Ordering::Equal => {
                let Node {
                    key: stored_key,
                    value: stored_value,
                    next,
                } = *node;
                *link = next;
                semantics.free_key(stored_key);
                semantics.free_value(stored_value);
                self.length -= 1;
                tracing::debug!(length = self.length, "entry removed");
                Ok(())
            }
            untouched => {
                *link = untouched;
                tracing::debug!(length = self.length, "remove of absent key");
                Err(MapError::ItemDoesNotExist)
            }
        }
    }

    /// Removes and releases every entry.
    pub fn clear(&mut self) {
        let released = self.release_all();
        tracing::debug!(released, "map cleared");
    }

    /// Consumes the map, releasing every entry through the free functions.
    ///
    /// The release itself is done by `Drop`, exactly as when the map goes
    /// out of scope. The only difference is a `map destroyed` debug event
    /// carrying the length at the time of the call.
    pub fn destroy(self) {
        tracing::debug!(length = self.length, "map destroyed");
        drop(self);
    }

    /// Returns the first link whose node does not compare less than `key`.
    fn seek_mut<'a>(semantics: &S, mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V> {
        while link
            .as_ref()
            .is_some_and(|node| semantics.compare(&node.key, key) == Ordering::Less)
        {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }

    /// Copies a key and a value, releasing the key copy if the value copy fails.
    fn copy_entry(semantics: &S, key: &K, value: &V) -> MapResult<(K, V)> {
        let new_key = semantics.copy_key(key).map_err(|failure| {
            tracing::warn!("key copy failed");
            MapError::from(failure)
        })?;
        match semantics.copy_value(value) {
            Ok(new_value) => Ok((new_key, new_value)),
            Err(failure) => {
                semantics.free_key(new_key);
                tracing::warn!("value copy failed, key copy released");
                Err(failure.into())
            }
        }
    }

    fn release_all(&mut self) -> usize {
        let released = self.length;
        let mut link = self.head.take();
        while let Some(node) = link {
            let Node { key, value, next } = *node;
            self.semantics.free_key(key);
            self.semantics.free_value(value);
            link = next;
        }
        self.length = 0;
        released
    }

    // =========================================================================
    // Deep Copy
    // =========================================================================

    /// Creates an independent map holding fresh copies of every entry.
    ///
    /// The copy shares this map's semantics (cloned) but none of its keys or
    /// values; mutating one map never affects the other.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfMemory`] if any copy fails. Entries already
    /// copied are released and this map is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::OrderedMap;
    ///
    /// let mut original = OrderedMap::new();
    /// original.put(&1, &"one").unwrap();
    ///
    /// let copy = original.deep_copy().unwrap();
    /// original.remove(&1).unwrap();
    ///
    /// assert!(!original.contains(&1));
    /// assert!(copy.contains(&1));
    /// ```
    pub fn deep_copy(&self) -> MapResult<Self>
    where
        S: Clone,
    {
        let mut copy = Self::with_semantics(self.semantics.clone());
        let mut tail = &mut copy.head;
        for (key, value) in self {
            let (new_key, new_value) = Self::copy_entry(&copy.semantics, key, value)?;
            tail = &mut tail
                .insert(Box::new(Node {
                    key: new_key,
                    value: new_value,
                    next: None,
                }))
                .next;
            copy.length += 1;
        }
        tracing::debug!(length = copy.length, "map deep-copied");
        Ok(copy)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            link: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns a new, unpositioned cursor over this map.
    ///
    /// See [`Cursor`] for the traversal protocol.
    pub const fn cursor(&self) -> Cursor<'_, K, V, S> {
        Cursor::new(self)
    }

    /// Returns an iterator yielding caller-owned copies of every key, in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(&"b".to_string(), &2).unwrap();
    /// map.put(&"a".to_string(), &1).unwrap();
    ///
    /// let keys: Vec<String> = map.copied_keys().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    /// ```
    pub const fn copied_keys(&self) -> CopiedKeys<'_, K, V, S> {
        CopiedKeys::new(self.cursor())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of an [`OrderedMap`].
pub struct Iter<'a, K, V> {
    link: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.link.map(|node| {
            self.link = node.next.as_deref();
            self.remaining -= 1;
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            link: self.link,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: EntrySemantics<K, V>> Drop for OrderedMap<K, V, S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<K: Clone + Ord, V: Clone> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V, S: EntrySemantics<K, V>> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V: PartialEq, S: EntrySemantics<K, V>> PartialEq for OrderedMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .zip(other)
                .all(|((left_key, left_value), (right_key, right_value))| {
                    self.semantics.compare(left_key, right_key) == Ordering::Equal
                        && left_value == right_value
                })
    }
}

impl<K, V: Eq, S: EntrySemantics<K, V>> Eq for OrderedMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S: EntrySemantics<K, V>> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S: EntrySemantics<K, V>> fmt::Display
    for OrderedMap<K, V, S>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(OrderedMap<i32, String>: Send, Sync);
static_assertions::assert_not_impl_any!(OrderedMap<i32, String, Callbacks<i32, String>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for OrderedMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
    S: EntrySemantics<K, V>,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Clone + Ord,
    V: serde::Deserialize<'de> + Clone,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<K, V>()? {
            map.put(&key, &value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Clone + Ord,
    V: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keys_of<S: EntrySemantics<i32, String>>(map: &OrderedMap<i32, String, S>) -> Vec<i32> {
        map.keys().copied().collect()
    }

    fn filled(keys: &[i32]) -> OrderedMap<i32, String> {
        let mut map = OrderedMap::new();
        for key in keys {
            map.put(key, &key.to_string()).unwrap();
        }
        map
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_map() {
        let map: OrderedMap<i32, String> = OrderedMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    #[rstest]
    fn test_display_sorted() {
        let map = filled(&[3, 1, 2]);
        assert_eq!(format!("{map}"), "{1: 1, 2: 2, 3: 3}");
    }

    #[rstest]
    fn test_debug_sorted() {
        let map = filled(&[2, 1]);
        assert_eq!(format!("{map:?}"), r#"{1: "1", 2: "2"}"#);
    }

    // =========================================================================
    // Positioning Tests
    // =========================================================================

    #[rstest]
    #[case::ascending(&[1, 2, 3, 4])]
    #[case::descending(&[4, 3, 2, 1])]
    #[case::interleaved(&[2, 4, 1, 3])]
    #[case::head_then_tail(&[3, 1, 4, 2])]
    fn test_put_keeps_links_sorted(#[case] keys: &[i32]) {
        let map = filled(keys);
        assert_eq!(keys_of(&map), vec![1, 2, 3, 4]);
        assert_eq!(map.len(), 4);
    }

    #[rstest]
    #[case::head(1, vec![2, 3])]
    #[case::middle(2, vec![1, 3])]
    #[case::tail(3, vec![1, 2])]
    fn test_remove_unlinks_exactly_one(#[case] removed: i32, #[case] expected: Vec<i32>) {
        let mut map = filled(&[1, 2, 3]);
        assert_eq!(map.remove(&removed), Ok(()));
        assert_eq!(keys_of(&map), expected);
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    #[case::below_all(0)]
    #[case::between(5)]
    #[case::above_all(99)]
    fn test_remove_absent_key_leaves_list_intact(#[case] absent: i32) {
        let mut map = filled(&[1, 4, 9]);
        assert_eq!(map.remove(&absent), Err(MapError::ItemDoesNotExist));
        assert_eq!(keys_of(&map), vec![1, 4, 9]);
    }

    #[rstest]
    fn test_remove_from_empty_map() {
        let mut map: OrderedMap<i32, String> = OrderedMap::new();
        assert_eq!(map.remove(&1), Err(MapError::ItemDoesNotExist));
    }

    #[rstest]
    fn test_get_stops_at_greater_key() {
        let map = filled(&[10, 20]);
        assert_eq!(map.get(&15), None);
        assert_eq!(map.get(&20), Some(&"20".to_string()));
    }

    #[rstest]
    fn test_get_mut_updates_in_place() {
        let mut map = filled(&[1, 2]);
        map.get_mut(&2).unwrap().push('!');
        assert_eq!(map.get(&2), Some(&"2!".to_string()));
        assert_eq!(map.get_mut(&3), None);
    }

    #[rstest]
    fn test_first_and_last_key_value() {
        let map = filled(&[5, 1, 3]);
        assert_eq!(map.first_key_value(), Some((&1, &"1".to_string())));
        assert_eq!(map.last_key_value(), Some((&5, &"5".to_string())));

        let empty: OrderedMap<i32, String> = OrderedMap::new();
        assert_eq!(empty.first_key_value(), None);
        assert_eq!(empty.last_key_value(), None);
    }

    #[rstest]
    fn test_clear_then_reuse() {
        let mut map = filled(&[1, 2, 3]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);

        map.put(&7, &"seven".to_string()).unwrap();
        assert_eq!(keys_of(&map), vec![7]);
    }

    #[rstest]
    fn test_iter_is_exact_size() {
        let map = filled(&[1, 2, 3]);
        let mut iterator = map.iter();
        assert_eq!(iterator.len(), 3);
        iterator.next();
        assert_eq!(iterator.len(), 2);
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        assert_eq!(filled(&[1, 2, 3]), filled(&[3, 2, 1]));
        assert_ne!(filled(&[1, 2]), filled(&[1, 2, 3]));
    }

    #[rstest]
    fn test_deep_copy_of_empty_map() {
        let map: OrderedMap<i32, String> = OrderedMap::new();
        let copy = map.deep_copy().unwrap();
        assert!(copy.is_empty());
    }

    #[rstest]
    fn test_deep_copy_preserves_order_and_length() {
        let map = filled(&[2, 3, 1]);
        let copy = map.deep_copy().unwrap();
        assert_eq!(keys_of(&copy), vec![1, 2, 3]);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy, map);
    }

    #[rstest]
    fn test_long_list_drops_without_recursion() {
        let mut map = OrderedMap::new();
        for key in (0..100_000).rev() {
            map.put(&key, &()).unwrap();
        }
        assert_eq!(map.len(), 100_000);
        drop(map);
    }
}
