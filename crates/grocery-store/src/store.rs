//! GroceryStore — owner of the canonical in-memory grocery list.
//!
//! The list lives for the lifetime of the process, starts empty, and is only
//! mutated through the operations here. Callers follow a two-call contract:
//! [`GroceryStore::resolve_status`] first, then the mutating operation with
//! the resolved status. The mutators re-validate the membership predicate
//! under the list lock, so a status that went stale between the two calls is
//! refused instead of corrupting the list.
//!
//! Invariant: no two items on the list ever share a `name`.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::types::{Item, ItemStatus, ItemUpdate};

/// Thread-safe handle to the shared grocery list.
///
/// The lock is held only for the body of a single operation and never across
/// an `.await` (the store has no async code).
#[derive(Clone, Default)]
pub struct GroceryStore {
    items: Arc<Mutex<Vec<Item>>>,
}

impl GroceryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the grocery list, in insertion order.
    pub fn grocery_list(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }

    /// Resolve the membership status of a candidate name.
    ///
    /// Pure read: no side effects. The returned status gates the mutating
    /// operations and carries the message the transport surfaces on
    /// rejection.
    pub fn resolve_status(&self, name: &str) -> ItemStatus {
        if name.is_empty() {
            return ItemStatus::invalid_name();
        }
        let items = self.items.lock().unwrap();
        if items.iter().any(|item| item.name == name) {
            ItemStatus::already_on_list(name)
        } else {
            ItemStatus::not_on_list(name)
        }
    }

    /// Append `item` to the end of the list.
    ///
    /// Returns false (list unchanged) if the item has no valid name or
    /// `status` says the name is already on the list. The duplicate check is
    /// repeated under the lock so a stale status cannot introduce a
    /// duplicate.
    pub fn add_item(&self, item: Item, status: &ItemStatus) -> bool {
        if !item.has_valid_name() || status.on_list {
            return false;
        }
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| existing.name == item.name) {
            return false;
        }
        debug!(name = %item.name, "item added to grocery list");
        items.push(item);
        true
    }

    /// Overwrite fields of the stored item named `update.name`.
    ///
    /// Only fields present on `update` are applied; absent fields are left
    /// unchanged on the stored item (an explicit `null` counts as present and
    /// clears the value). The name itself is never changed. Returns false if
    /// `status` says the item is not on the list, or if it has since been
    /// removed.
    pub fn update_item(&self, update: &ItemUpdate, status: &ItemStatus) -> bool {
        if !status.on_list {
            return false;
        }
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.iter_mut().find(|item| item.name == update.name) else {
            return false;
        };
        if let Some(price) = update.price {
            item.price = price;
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(purchased) = update.purchased {
            item.purchased = purchased;
        }
        debug!(name = %item.name, "item updated on grocery list");
        true
    }

    /// Remove the item named `name` from the list.
    ///
    /// Order of the remaining items is preserved. Returns false if `status`
    /// says the item is not on the list, or if it has since been removed.
    pub fn delete_item(&self, name: &str, status: &ItemStatus) -> bool {
        if !status.on_list {
            return false;
        }
        let mut items = self.items.lock().unwrap();
        let Some(pos) = items.iter().position(|item| item.name == name) else {
            return false;
        };
        let removed = items.remove(pos);
        debug!(name = %removed.name, "item removed from grocery list");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            price: Some(1.00),
            quantity: Some(1.0),
            purchased: Some(false),
        }
    }

    fn add(store: &GroceryStore, it: Item) -> bool {
        let status = store.resolve_status(&it.name);
        store.add_item(it, &status)
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = GroceryStore::new();
        assert!(store.grocery_list().is_empty());
    }

    #[test]
    fn add_appends_at_end() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Milk")));
        assert!(add(&store, item("Eggs")));

        let list = store.grocery_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Milk");
        assert_eq!(list[1].name, "Eggs");
    }

    #[test]
    fn add_rejects_missing_name() {
        let store = GroceryStore::new();
        let unnamed = Item {
            name: String::new(),
            price: Some(1.50),
            quantity: Some(4.0),
            purchased: Some(false),
        };
        let status = store.resolve_status(&unnamed.name);
        assert!(!store.add_item(unnamed, &status));
        assert!(store.grocery_list().is_empty());
    }

    #[test]
    fn add_rejects_duplicate() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));
        assert!(!add(&store, item("Test1")));

        let list = store.grocery_list();
        assert_eq!(list.iter().filter(|i| i.name == "Test1").count(), 1);
    }

    #[test]
    fn stale_status_cannot_introduce_duplicate() {
        let store = GroceryStore::new();
        // Status resolved before the name was taken by another caller.
        let stale = store.resolve_status("Test1");
        assert!(add(&store, item("Test1")));

        assert!(!store.add_item(item("Test1"), &stale));
        assert_eq!(store.grocery_list().len(), 1);
    }

    #[test]
    fn status_message_invalid_name() {
        let store = GroceryStore::new();
        let status = store.resolve_status("");
        assert!(!status.on_list);
        assert_eq!(status.message, "Item does not have a valid name");
    }

    #[test]
    fn status_message_present_and_absent() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let present = store.resolve_status("Test1");
        assert!(present.on_list);
        assert_eq!(present.message, "Test1 is already on the grocery list");

        let absent = store.resolve_status("Test2");
        assert!(!absent.on_list);
        assert_eq!(absent.message, "Test2 is not on the grocery list");
    }

    #[test]
    fn update_overwrites_present_fields() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let update = ItemUpdate {
            name: "Test1".to_string(),
            price: Some(Some(2.00)),
            quantity: Some(Some(2.0)),
            purchased: Some(Some(true)),
        };
        let status = store.resolve_status("Test1");
        assert!(store.update_item(&update, &status));

        let stored = &store.grocery_list()[0];
        assert_eq!(stored.price, Some(2.00));
        assert_eq!(stored.quantity, Some(2.0));
        assert_eq!(stored.purchased, Some(true));
    }

    #[test]
    fn update_leaves_absent_fields_unchanged() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let update = ItemUpdate {
            name: "Test1".to_string(),
            price: Some(Some(2.00)),
            ..ItemUpdate::default()
        };
        let status = store.resolve_status("Test1");
        assert!(store.update_item(&update, &status));

        let stored = &store.grocery_list()[0];
        assert_eq!(stored.price, Some(2.00));
        assert_eq!(stored.quantity, Some(1.0));
        assert_eq!(stored.purchased, Some(false));
    }

    #[test]
    fn update_applies_explicit_null() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let update = ItemUpdate {
            name: "Test1".to_string(),
            price: Some(None),
            ..ItemUpdate::default()
        };
        let status = store.resolve_status("Test1");
        assert!(store.update_item(&update, &status));

        let stored = &store.grocery_list()[0];
        assert_eq!(stored.price, None);
        assert_eq!(stored.quantity, Some(1.0));
    }

    #[test]
    fn update_rejects_not_found_and_unnamed() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));
        let before = store.grocery_list();

        let unknown = ItemUpdate {
            name: "Test2".to_string(),
            price: Some(Some(2.00)),
            ..ItemUpdate::default()
        };
        let status = store.resolve_status("Test2");
        assert!(!store.update_item(&unknown, &status));

        let unnamed = ItemUpdate {
            price: Some(Some(1.50)),
            ..ItemUpdate::default()
        };
        let status = store.resolve_status("");
        assert!(!store.update_item(&unnamed, &status));

        assert_eq!(store.grocery_list(), before);
    }

    #[test]
    fn update_never_renames() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let update = ItemUpdate {
            name: "Test1".to_string(),
            purchased: Some(Some(true)),
            ..ItemUpdate::default()
        };
        let status = store.resolve_status("Test1");
        assert!(store.update_item(&update, &status));
        assert_eq!(store.grocery_list()[0].name, "Test1");
    }

    #[test]
    fn delete_removes_and_preserves_order() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Milk")));
        assert!(add(&store, item("Eggs")));
        assert!(add(&store, item("Bread")));

        let status = store.resolve_status("Eggs");
        assert!(store.delete_item("Eggs", &status));

        let list = store.grocery_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Milk");
        assert_eq!(list[1].name, "Bread");
    }

    #[test]
    fn delete_rejects_not_found_and_unnamed() {
        let store = GroceryStore::new();
        assert!(add(&store, item("Test1")));

        let status = store.resolve_status("Test2");
        assert!(!store.delete_item("Test2", &status));

        let status = store.resolve_status("");
        assert!(!store.delete_item("", &status));

        assert_eq!(store.grocery_list().len(), 1);
    }

    #[test]
    fn no_duplicate_names_after_mixed_operations() {
        let store = GroceryStore::new();
        for name in ["Milk", "Eggs", "Milk", "Bread", "Eggs"] {
            add(&store, item(name));
        }
        let status = store.resolve_status("Eggs");
        store.delete_item("Eggs", &status);
        add(&store, item("Eggs"));

        let list = store.grocery_list();
        for entry in &list {
            assert_eq!(list.iter().filter(|i| i.name == entry.name).count(), 1);
        }
    }

    #[test]
    fn store_clones_share_state() {
        let store = GroceryStore::new();
        let handle = store.clone();
        assert!(add(&handle, item("Milk")));
        assert_eq!(store.grocery_list().len(), 1);
    }
}
