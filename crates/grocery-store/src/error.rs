//! Rejection reasons for grocery list operations.

use thiserror::Error;

/// Why a grocery list operation was refused.
///
/// The `Display` output of each variant is exactly the message carried on the
/// corresponding [`ItemStatus`](crate::ItemStatus), so rejection
/// classification and status messages share one source of truth.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate item has no usable name.
    #[error("Item does not have a valid name")]
    InvalidName,

    /// An item with this name is already on the list (add refused).
    #[error("{0} is already on the grocery list")]
    DuplicateItem(String),

    /// No item with this name is on the list (update/delete refused).
    #[error("{0} is not on the grocery list")]
    NotFound(String),
}
