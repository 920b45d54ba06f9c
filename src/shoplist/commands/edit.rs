//! Inline editing: at most one item is in editing mode at a time.
//!
//! [`begin`] moves the editing flag to one item and hands back the values
//! the editor starts from. [`commit`] writes the edited values into that item
//! and leaves editing mode. A rejected commit keeps the item in editing mode
//! with its old values, so the user can correct the input.

use crate::commands::{CmdMessage, CmdResult, ItemEdit};
use crate::error::Result;
use crate::model::{validate_entry, ItemId};
use crate::store::ItemStore;

pub fn begin<S: ItemStore>(store: &mut S, id: ItemId) -> Result<CmdResult> {
    let mut flipped = false;
    for item in store.items_mut() {
        let editing = item.id == id;
        if item.editing != editing {
            item.editing = editing;
            flipped = true;
        }
    }

    let mut result = CmdResult::default().with_listed_items(store.items().to_vec());
    if flipped {
        result = result.changed();
    }

    match store.get_item(id) {
        Some(item) => {
            tracing::debug!(%id, "editing started");
            let draft = item.draft();
            result.affected_items.push(item.clone());
            result.add_message(CmdMessage::info(format!(
                "Editing item ({}): {}",
                id, item.name
            )));
            Ok(result.with_draft(draft))
        }
        None => {
            tracing::debug!(%id, "edit requested for unknown item");
            result.add_message(CmdMessage::warning(format!("Item {} not found", id)));
            Ok(result)
        }
    }
}

pub fn commit<S: ItemStore>(store: &mut S, edit: &ItemEdit) -> Result<CmdResult> {
    if store.get_item(edit.id).is_none() {
        let mut result = CmdResult::default().with_listed_items(store.items().to_vec());
        result.add_message(CmdMessage::info(format!("Item {} not found", edit.id)));
        return Ok(result);
    }

    let quantity = validate_entry(&edit.name, &edit.quantity_text).map_err(|err| {
        tracing::info!(id = %edit.id, %err, "edit rejected");
        err
    })?;

    let Some(item) = store.get_item_mut(edit.id) else {
        return Ok(CmdResult::default());
    };
    item.name = edit.name.clone();
    item.quantity = quantity;
    item.editing = false;
    let updated = item.clone();
    tracing::debug!(id = %edit.id, quantity, "edit committed");

    let mut result = CmdResult::default()
        .with_affected_items(vec![updated.clone()])
        .with_listed_items(store.items().to_vec())
        .changed();
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {} x{}",
        updated.id, updated.name, updated.quantity
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ShopError, ValidationError};
    use crate::store::memory::fixtures::StoreFixture;

    fn editing_count<S: ItemStore>(store: &S) -> usize {
        store.items().iter().filter(|i| i.editing).count()
    }

    #[test]
    fn begin_marks_only_target() {
        let mut store = StoreFixture::new().with_items(3).store;
        let result = begin(&mut store, ItemId(2)).unwrap();

        assert!(result.changed);
        assert_eq!(editing_count(&store), 1);
        assert!(store.get_item(ItemId(2)).unwrap().editing);
    }

    #[test]
    fn begin_moves_editing_flag() {
        let mut store = StoreFixture::new().with_items(3).store;
        for id in [1, 3, 2, 2, 1] {
            begin(&mut store, ItemId(id)).unwrap();
            assert_eq!(editing_count(&store), 1);
        }
        assert!(store.get_item(ItemId(1)).unwrap().editing);
    }

    #[test]
    fn begin_returns_prefilled_draft() {
        let mut store = StoreFixture::new().with_item("Bread", 2).store;
        let draft = begin(&mut store, ItemId(1)).unwrap().draft.unwrap();
        assert_eq!(draft.name, "Bread");
        assert_eq!(draft.quantity_text, "2");
    }

    #[test]
    fn begin_same_item_twice_is_not_a_change() {
        let mut store = StoreFixture::new().with_items(2).store;
        begin(&mut store, ItemId(1)).unwrap();
        let again = begin(&mut store, ItemId(1)).unwrap();
        assert!(!again.changed);
        assert!(again.draft.is_some());
    }

    #[test]
    fn begin_unknown_id_clears_editing() {
        let mut store = StoreFixture::new()
            .with_item("Milk", 1)
            .with_editing_item("Eggs", 12)
            .store;
        let result = begin(&mut store, ItemId(42)).unwrap();

        assert!(result.draft.is_none());
        assert!(result.changed);
        assert_eq!(editing_count(&store), 0);
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }

    #[test]
    fn commit_updates_only_target() {
        let mut store = StoreFixture::new()
            .with_item("Milk", 1)
            .with_item("Eggs", 12)
            .store;
        begin(&mut store, ItemId(2)).unwrap();
        let result = commit(&mut store, &ItemEdit::new(ItemId(2), "Free-range eggs", "6")).unwrap();

        assert!(result.changed);
        let eggs = store.get_item(ItemId(2)).unwrap();
        assert_eq!(eggs.name, "Free-range eggs");
        assert_eq!(eggs.quantity, 6);
        assert!(!eggs.editing);

        let milk = store.get_item(ItemId(1)).unwrap();
        assert_eq!(milk.name, "Milk");
        assert_eq!(milk.quantity, 1);
        assert!(!milk.editing);
    }

    #[test]
    fn commit_defaults_unparseable_quantity() {
        let mut store = StoreFixture::new().with_editing_item("Milk", 3).store;
        commit(&mut store, &ItemEdit::new(ItemId(1), "Milk", "lots")).unwrap();
        assert_eq!(store.get_item(ItemId(1)).unwrap().quantity, 1);
    }

    #[test]
    fn commit_rejects_non_positive_quantity() {
        let mut store = StoreFixture::new().with_editing_item("Milk", 3).store;
        let err = commit(&mut store, &ItemEdit::new(ItemId(1), "Milk", "-2")).unwrap_err();

        assert!(matches!(
            err,
            ShopError::Validation(ValidationError::NonPositiveQuantity(-2))
        ));
        let milk = store.get_item(ItemId(1)).unwrap();
        assert_eq!(milk.quantity, 3);
        assert!(milk.editing);
    }

    #[test]
    fn commit_rejects_blank_name() {
        let mut store = StoreFixture::new().with_editing_item("Milk", 3).store;
        let err = commit(&mut store, &ItemEdit::new(ItemId(1), "", "2")).unwrap_err();
        assert!(matches!(err, ShopError::Validation(ValidationError::BlankName)));
        assert_eq!(store.get_item(ItemId(1)).unwrap().name, "Milk");
    }

    #[test]
    fn commit_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_items(2).store;
        let result = commit(&mut store, &ItemEdit::new(ItemId(9), "X", "1")).unwrap();
        assert!(!result.changed);
        assert!(result.affected_items.is_empty());
        assert_eq!(result.listed_items.len(), 2);
    }
}
