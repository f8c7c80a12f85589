//! # ordered-map
//!
//! A generic ordered key-value container whose value semantics are supplied
//! by the caller.
//!
//! ## Overview
//!
//! - **Sorted at rest**: entries are kept in ascending key order on every
//!   insertion; there is no separate sort step.
//! - **Caller-defined semantics**: how keys compare and how keys and values
//!   are copied and released is fixed per map through
//!   [`EntrySemantics`](ordered::EntrySemantics).
//! - **Copy-out traversal**: cursors hand out owned key copies that stay
//!   valid whatever happens to the map afterwards.
//! - **No partial updates**: a failing copy leaves the map as it was.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for [`OrderedMap`](ordered::OrderedMap)
//!
//! ## Logging
//!
//! Mutations emit `tracing` events (`debug` for structural changes, `warn`
//! for failing copies). Install any `tracing` subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use ordered_map::prelude::*;
//!
//! let mut map = OrderedMap::new();
//! map.put(&"white".to_string(), &1500_u32).unwrap();
//! map.put(&"black".to_string(), &1480_u32).unwrap();
//!
//! let first = map.cursor().first();
//! assert_eq!(first, Some(Ok("black".to_string())));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordered_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
