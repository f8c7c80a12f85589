//! Value semantics for the keys and values of an [`OrderedMap`](super::OrderedMap).
//!
//! The map never assumes how its keys and values are duplicated, ordered or
//! released. Those five behaviours are bound to each map instance at
//! construction through an [`EntrySemantics`] implementation:
//!
//! - [`Natural`]: `Clone` copies, `Ord` ordering, plain drop. Copies never fail.
//! - [`Callbacks`]: five caller-supplied functions, for key or value types
//!   whose duplication can fail or must be tracked.
//!
//! # Examples
//!
//! ```rust
//! use ordered_map::ordered::{CallbacksBuilder, CopyFailure, EntrySemantics};
//! use std::cmp::Ordering;
//!
//! let callbacks = CallbacksBuilder::<u32, String>::new()
//!     .copy_key(|key| Ok(*key))
//!     .copy_value(|value| Ok(value.clone()))
//!     .free_key(drop)
//!     .free_value(drop)
//!     .compare(|left, right| right.cmp(left))
//!     .build()
//!     .unwrap();
//!
//! // Descending order, defined entirely by the compare callback.
//! assert_eq!(callbacks.compare(&1, &2), Ordering::Greater);
//! assert_eq!(callbacks.copy_key(&7), Ok::<u32, CopyFailure>(7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::error::{CopyFailure, MapError, MapResult};

// =============================================================================
// EntrySemantics
// =============================================================================

/// The copy, compare and free behaviour a map applies to its entries.
///
/// `compare` must be a strict total order that stays consistent for the
/// lifetime of the map. `copy_key` and `copy_value` may fail; `free_key` and
/// `free_value` must not.
pub trait EntrySemantics<K, V> {
    /// Three-way comparison of two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;

    /// Produces an independent duplicate of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyFailure`] if no duplicate could be produced.
    fn copy_key(&self, key: &K) -> Result<K, CopyFailure>;

    /// Produces an independent duplicate of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyFailure`] if no duplicate could be produced.
    fn copy_value(&self, value: &V) -> Result<V, CopyFailure>;

    /// Releases a key previously produced by [`copy_key`](Self::copy_key).
    fn free_key(&self, key: K) {
        drop(key);
    }

    /// Releases a value previously produced by [`copy_value`](Self::copy_value).
    fn free_value(&self, value: V) {
        drop(value);
    }
}

// =============================================================================
// Natural
// =============================================================================

/// Semantics derived from the standard traits: `Clone` to copy, `Ord` to
/// compare, drop to free.
pub struct Natural<K, V> {
    marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Natural<K, V> {
    /// Creates the natural semantics for `K` and `V`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<K, V> Default for Natural<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Natural<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Natural<K, V> {}

impl<K, V> fmt::Debug for Natural<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Natural")
    }
}

impl<K: Clone + Ord, V: Clone> EntrySemantics<K, V> for Natural<K, V> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }

    #[inline]
    fn copy_key(&self, key: &K) -> Result<K, CopyFailure> {
        Ok(key.clone())
    }

    #[inline]
    fn copy_value(&self, value: &V) -> Result<V, CopyFailure> {
        Ok(value.clone())
    }
}

// =============================================================================
// Callbacks
// =============================================================================

/// A shared, possibly failing copy function.
pub type CopyFn<T> = Rc<dyn Fn(&T) -> Result<T, CopyFailure>>;

/// A shared release function.
pub type FreeFn<T> = Rc<dyn Fn(T)>;

/// A shared three-way comparison function.
pub type CompareFn<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Semantics made of five caller-supplied functions.
///
/// Cloning a `Callbacks` shares the functions, so a deep copy of a map keeps
/// using the exact callbacks of its source.
///
/// The functions are reference counted with `Rc`; a map built on `Callbacks`
/// therefore stays on the thread that created it.
pub struct Callbacks<K, V> {
    copy_key: CopyFn<K>,
    copy_value: CopyFn<V>,
    free_key: FreeFn<K>,
    free_value: FreeFn<V>,
    compare: CompareFn<K>,
}

impl<K, V> Callbacks<K, V> {
    /// Assembles callbacks from optional parts.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NullArgument`] naming the first missing function,
    /// checked in the order `copy_key`, `copy_value`, `free_key`,
    /// `free_value`, `compare`.
    pub fn from_parts(
        copy_key: Option<CopyFn<K>>,
        copy_value: Option<CopyFn<V>>,
        free_key: Option<FreeFn<K>>,
        free_value: Option<FreeFn<V>>,
        compare: Option<CompareFn<K>>,
    ) -> MapResult<Self> {
        Ok(Self {
            copy_key: copy_key.ok_or(MapError::NullArgument {
                argument: "copy_key",
            })?,
            copy_value: copy_value.ok_or(MapError::NullArgument {
                argument: "copy_value",
            })?,
            free_key: free_key.ok_or(MapError::NullArgument {
                argument: "free_key",
            })?,
            free_value: free_value.ok_or(MapError::NullArgument {
                argument: "free_value",
            })?,
            compare: compare.ok_or(MapError::NullArgument {
                argument: "compare",
            })?,
        })
    }
}

impl<K, V> Clone for Callbacks<K, V> {
    fn clone(&self) -> Self {
        Self {
            copy_key: Rc::clone(&self.copy_key),
            copy_value: Rc::clone(&self.copy_value),
            free_key: Rc::clone(&self.free_key),
            free_value: Rc::clone(&self.free_value),
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<K, V> fmt::Debug for Callbacks<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl<K, V> EntrySemantics<K, V> for Callbacks<K, V> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.compare)(left, right)
    }

    #[inline]
    fn copy_key(&self, key: &K) -> Result<K, CopyFailure> {
        (self.copy_key)(key)
    }

    #[inline]
    fn copy_value(&self, value: &V) -> Result<V, CopyFailure> {
        (self.copy_value)(value)
    }

    #[inline]
    fn free_key(&self, key: K) {
        (self.free_key)(key);
    }

    #[inline]
    fn free_value(&self, value: V) {
        (self.free_value)(value);
    }
}

// =============================================================================
// CallbacksBuilder
// =============================================================================

/// Step-by-step construction of [`Callbacks`].
///
/// Every setter is optional; [`build`](Self::build) reports the first
/// function that was never supplied.
pub struct CallbacksBuilder<K, V> {
    copy_key: Option<CopyFn<K>>,
    copy_value: Option<CopyFn<V>>,
    free_key: Option<FreeFn<K>>,
    free_value: Option<FreeFn<V>>,
    compare: Option<CompareFn<K>>,
}

impl<K, V> CallbacksBuilder<K, V> {
    /// Creates a builder with no functions set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            copy_key: None,
            copy_value: None,
            free_key: None,
            free_value: None,
            compare: None,
        }
    }

    /// Sets the key copy function.
    #[must_use]
    pub fn copy_key<F>(mut self, function: F) -> Self
    where
        F: Fn(&K) -> Result<K, CopyFailure> + 'static,
    {
        self.copy_key = Some(Rc::new(function));
        self
    }

    /// Sets the value copy function.
    #[must_use]
    pub fn copy_value<F>(mut self, function: F) -> Self
    where
        F: Fn(&V) -> Result<V, CopyFailure> + 'static,
    {
        self.copy_value = Some(Rc::new(function));
        self
    }

    /// Sets the key release function.
    #[must_use]
    pub fn free_key<F>(mut self, function: F) -> Self
    where
        F: Fn(K) + 'static,
    {
        self.free_key = Some(Rc::new(function));
        self
    }

    /// Sets the value release function.
    #[must_use]
    pub fn free_value<F>(mut self, function: F) -> Self
    where
        F: Fn(V) + 'static,
    {
        self.free_value = Some(Rc::new(function));
        self
    }

    /// Sets the key comparison function.
    #[must_use]
    pub fn compare<F>(mut self, function: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering + 'static,
    {
        self.compare = Some(Rc::new(function));
        self
    }

    /// Finishes the builder.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NullArgument`] if any of the five functions was
    /// not set.
    pub fn build(self) -> MapResult<Callbacks<K, V>> {
        Callbacks::from_parts(
            self.copy_key,
            self.copy_value,
            self.free_key,
            self.free_value,
            self.compare,
        )
    }
}

impl<K, V> Default for CallbacksBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
