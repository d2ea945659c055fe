//! Domain types for the grocery list store.
//!
//! All types are serializable to/from JSON for the HTTP transport. An item
//! name is the unique key within the list; a missing name deserializes as the
//! empty string and is treated as invalid everywhere.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Rejection;

/// A single entry on the grocery list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique key within the list (case-sensitive exact match).
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Whether this item has been bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased: Option<bool>,
}

impl Item {
    /// A name is valid iff it is non-empty. Field absence and `""` are the
    /// same thing after deserialization.
    pub fn has_valid_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A partial update for an existing item, keyed by `name`.
///
/// Each field is a double `Option`: the outer layer records whether the field
/// was present in the request at all, the inner layer is the value to store.
/// Absence is the only "skip" signal — an explicit `null` is applied as
/// given and clears the stored value. `name` itself is never updated; it is
/// the immutable lookup key.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub quantity: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub purchased: Option<Option<bool>>,
}

/// Distinguishes a field that is present (possibly `null`) from one that is
/// absent: this deserializer only runs when the key exists, so it wraps the
/// parsed value in the outer `Some`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Transient membership-check result, computed by
/// [`GroceryStore::resolve_status`](crate::GroceryStore::resolve_status) and
/// passed to the mutating operations. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStatus {
    /// True iff an item with the candidate's name exists on the list.
    pub on_list: bool,
    /// Human-readable explanation, suitable for surfacing to a caller.
    pub message: String,
}

impl ItemStatus {
    /// Status for a candidate without a usable name.
    pub fn invalid_name() -> Self {
        Self {
            on_list: false,
            message: Rejection::InvalidName.to_string(),
        }
    }

    /// Status for a name that is already on the list.
    pub fn already_on_list(name: &str) -> Self {
        Self {
            on_list: true,
            message: Rejection::DuplicateItem(name.to_string()).to_string(),
        }
    }

    /// Status for a valid name that is not on the list.
    pub fn not_on_list(name: &str) -> Self {
        Self {
            on_list: false,
            message: Rejection::NotFound(name.to_string()).to_string(),
        }
    }
}
