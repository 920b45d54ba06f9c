use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_entry, Item};
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &mut S, name: &str, quantity_text: &str) -> Result<CmdResult> {
    let quantity = validate_entry(name, quantity_text).map_err(|err| {
        tracing::info!(name, quantity_text, %err, "add rejected");
        err
    })?;

    let id = store.allocate_id();
    let item = Item::new(id, name.to_string(), quantity);
    store.push_item(item.clone());
    tracing::debug!(%id, quantity, "item added");

    let mut result = CmdResult::default()
        .with_affected_items(vec![item])
        .with_listed_items(store.items().to_vec())
        .changed();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {} x{}",
        id, name, quantity
    )));
    Ok(result)
}
