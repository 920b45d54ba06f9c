//! # Storage Layer
//!
//! The [`ItemStore`] trait is the seam between the mutation logic in
//! `commands/` and the place items actually live. Commands only ever talk to
//! the trait, so they can be unit tested against a seeded store and the list
//! could move to another backing structure without touching them.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: ordered `Vec` plus an id counter. This is the
//!   only backend; the list lives for the lifetime of the process.
//!
//! ## Ordering and ids
//!
//! Insertion order is display order. Ids come from [`ItemStore::allocate_id`],
//! which must never hand out the same id twice for one store, regardless of
//! how many items have been removed in between.

use crate::model::{Item, ItemId};

pub mod memory;

/// Abstract interface for the ordered item collection.
pub trait ItemStore {
    /// Reserve a fresh id. Ids are never reused.
    fn allocate_id(&mut self) -> ItemId;

    /// Append an item at the end of the list.
    fn push_item(&mut self, item: Item);

    fn get_item(&self, id: ItemId) -> Option<&Item>;

    fn get_item_mut(&mut self, id: ItemId) -> Option<&mut Item>;

    /// Remove an item, returning it if it was present.
    fn remove_item(&mut self, id: ItemId) -> Option<Item>;

    /// All items in display order.
    fn items(&self) -> &[Item];

    fn items_mut(&mut self) -> &mut [Item];
}
