//! grocery-store — in-memory grocery list store.
//!
//! Holds the canonical grocery list (an ordered, duplicate-free sequence of
//! named items) and the operations that query and mutate it.
//!
//! # Architecture
//!
//! Mutations follow a two-step protocol: a caller first resolves an
//! [`ItemStatus`] for a candidate name, then passes that status alongside the
//! item to the mutating operation. The status carries both the membership
//! verdict and a human-readable message the transport can surface verbatim
//! on rejection.
//!
//! The [`GroceryStore`] is `Clone` + `Send` + `Sync` (backed by
//! `Arc<Mutex<..>>`) and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod types;

pub use error::Rejection;
pub use store::GroceryStore;
pub use types::{Item, ItemStatus, ItemUpdate};
