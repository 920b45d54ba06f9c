use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(store.items().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_item("Milk", 1)
            .with_item("Eggs", 12)
            .store;
        let result = run(&store).unwrap();
        let names: Vec<_> = result.listed_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Eggs"]);
        assert!(!result.changed);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed_items.is_empty());
    }
}
