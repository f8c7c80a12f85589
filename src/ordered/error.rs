//! Error types for [`OrderedMap`](super::OrderedMap) operations.
//!
//! Structural operations (`put`, `remove`, `deep_copy`, map construction from
//! callbacks) report failures through [`MapError`]. Lookups never fail: they
//! answer with `Option` or `bool`, since a missing key is an expected outcome.

use thiserror::Error;

/// Result type returned by the structural operations of the map.
///
/// `Ok` plays the role of a success code; every other outcome is a
/// [`MapError`] variant.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while building or mutating an ordered map.
///
/// # Examples
///
/// ```rust
/// use ordered_map::ordered::{MapError, OrderedMap};
///
/// let mut map: OrderedMap<i32, String> = OrderedMap::new();
/// assert_eq!(map.remove(&7), Err(MapError::ItemDoesNotExist));
/// assert_eq!(
///     MapError::ItemDoesNotExist.to_string(),
///     "no entry matches the given key"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// A required argument was not supplied.
    ///
    /// References cannot be null, so this is only produced while assembling
    /// callbacks, when one of the five functions is missing.
    #[error("required argument `{argument}` was not supplied")]
    NullArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// A copy callback could not produce a duplicate.
    ///
    /// The map is left exactly as it was before the failing call.
    #[error("a copy callback could not duplicate its input")]
    OutOfMemory,
    /// `remove` targeted a key with no matching entry.
    #[error("no entry matches the given key")]
    ItemDoesNotExist,
}

/// Failure signalled by a copy callback.
///
/// Copy callbacks return `Result<T, CopyFailure>`; the map converts the
/// failure into [`MapError::OutOfMemory`].
///
/// # Examples
///
/// ```rust
/// use ordered_map::ordered::{CopyFailure, MapError};
///
/// let error: MapError = CopyFailure.into();
/// assert_eq!(error, MapError::OutOfMemory);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("copy callback failed to produce a duplicate")]
pub struct CopyFailure;

impl From<CopyFailure> for MapError {
    fn from(_: CopyFailure) -> Self {
        Self::OutOfMemory
    }
}
