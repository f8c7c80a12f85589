//! Ordered key-value container with caller-supplied value semantics.
//!
//! This module provides:
//!
//! - [`OrderedMap`]: a sorted map whose keys and values are always copies made
//!   by the map itself
//! - [`EntrySemantics`]: the copy / compare / free behaviour bound to a map,
//!   with the [`Natural`] and [`Callbacks`] implementations
//! - [`Cursor`] and [`CopiedKeys`]: traversal with copy-out keys
//! - [`MapError`]: failures of structural operations
//!
//! # Ownership
//!
//! The map owns every key and value it stores. Callers own everything they
//! pass in (the map only reads it) and every key copy a cursor hands out.
//! References returned by lookups borrow the map.
//!
//! # Examples
//!
//! ## Natural semantics
//!
//! ```rust
//! use ordered_map::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.put(&3, &"c".to_string()).unwrap();
//! map.put(&1, &"a".to_string()).unwrap();
//! map.put(&2, &"b".to_string()).unwrap();
//!
//! let pairs: Vec<(i32, String)> = map
//!     .copied_keys()
//!     .map(|key| {
//!         let key = key.unwrap();
//!         let value = map.get(&key).unwrap().clone();
//!         (key, value)
//!     })
//!     .collect();
//! assert_eq!(
//!     pairs,
//!     vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
//! );
//! ```
//!
//! ## Callback semantics
//!
//! ```rust
//! use ordered_map::ordered::{CallbacksBuilder, CopyFailure, MapError, OrderedMap};
//!
//! // Values longer than eight bytes cannot be copied.
//! let callbacks = CallbacksBuilder::<u8, String>::new()
//!     .copy_key(|key| Ok(*key))
//!     .copy_value(|value| {
//!         if value.len() > 8 {
//!             Err(CopyFailure)
//!         } else {
//!             Ok(value.clone())
//!         }
//!     })
//!     .free_key(drop)
//!     .free_value(drop)
//!     .compare(|left, right| left.cmp(right))
//!     .build()
//!     .unwrap();
//!
//! let mut map = OrderedMap::with_semantics(callbacks);
//! assert_eq!(map.put(&1, &"short".to_string()), Ok(()));
//! assert_eq!(
//!     map.put(&2, &"far too long".to_string()),
//!     Err(MapError::OutOfMemory)
//! );
//! assert_eq!(map.len(), 1);
//! ```

mod cursor;
mod error;
mod map;
mod semantics;

pub use cursor::CopiedKeys;
pub use cursor::Cursor;
pub use error::CopyFailure;
pub use error::MapError;
pub use error::MapResult;
pub use map::Iter;
pub use map::OrderedMap;
pub use semantics::Callbacks;
pub use semantics::CallbacksBuilder;
pub use semantics::CompareFn;
pub use semantics::CopyFn;
pub use semantics::EntrySemantics;
pub use semantics::FreeFn;
pub use semantics::Natural;
