use super::ItemStore;
use crate::model::{Item, ItemId};

/// In-memory list storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn allocate_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId(self.last_id)
    }

    fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.store.allocate_id();
                let item = Item::new(id, format!("Item {}", i + 1), (i + 1) as u32);
                self.store.push_item(item);
            }
            self
        }

        pub fn with_item(mut self, name: &str, quantity: u32) -> Self {
            let id = self.store.allocate_id();
            self.store.push_item(Item::new(id, name.to_string(), quantity));
            self
        }

        pub fn with_editing_item(mut self, name: &str, quantity: u32) -> Self {
            let id = self.store.allocate_id();
            let mut item = Item::new(id, name.to_string(), quantity);
            item.editing = true;
            self.store.push_item(item);
            self
        }
    }
}
