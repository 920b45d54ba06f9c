use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &mut S, id: ItemId) -> Result<CmdResult> {
    let Some(item) = store.remove_item(id) else {
        tracing::debug!(%id, "delete requested for unknown item");
        let mut result = CmdResult::default().with_listed_items(store.items().to_vec());
        result.add_message(CmdMessage::info(format!("Item {} not found", id)));
        return Ok(result);
    };

    tracing::debug!(%id, "item deleted");
    let mut result = CmdResult::default()
        .with_listed_items(store.items().to_vec())
        .changed();
    result.add_message(CmdMessage::success(format!(
        "Item deleted ({}): {}",
        id, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}
