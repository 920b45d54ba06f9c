//! # API Facade
//!
//! [`ListStateStore`] is the single entry point a presentation layer talks
//! to. It forwards each user intent to the matching command, then tells
//! subscribers what happened.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** intents (add, begin edit, commit edit, delete) to `commands/`
//! - **Notifies** subscribers with [`ListEvent`]s after each operation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O and holds no business rules of its own; validation and
//! the editing invariant live in the commands.
//!
//! ## Notification rules
//!
//! - A command that changed the list emits `Changed` with the full list.
//! - A command rejected with a validation error emits `ValidationFailed`
//!   carrying the configured notice, and the error is still returned.
//! - No-ops (unknown ids, re-selecting the item already being edited) emit
//!   nothing.

use crate::commands::{self, ItemEdit};
use crate::config::ShoplistConfig;
use crate::error::{Result, ShopError};
use crate::events::Subscribers;
use crate::model::{Item, ItemId};
use crate::store::memory::InMemoryStore;
use crate::store::ItemStore;
use std::path::Path;

/// The shopping list state plus its subscribers.
///
/// Generic over `ItemStore`; the default is the in-memory list.
pub struct ListStateStore<S: ItemStore = InMemoryStore> {
    store: S,
    config: ShoplistConfig,
    subscribers: Subscribers,
}

impl ListStateStore<InMemoryStore> {
    /// An empty in-memory list.
    pub fn in_memory(config: ShoplistConfig) -> Self {
        Self::new(InMemoryStore::new(), config)
    }
}

impl<S: ItemStore> ListStateStore<S> {
    pub fn new(store: S, config: ShoplistConfig) -> Self {
        Self {
            store,
            config,
            subscribers: Subscribers::new(),
        }
    }

    pub fn add(&mut self, name: &str, quantity_text: &str) -> Result<CmdResult> {
        let outcome = commands::add::run(&mut self.store, name, quantity_text);
        self.notify(outcome)
    }

    /// Adds with the configured default quantity text.
    pub fn add_with_default_quantity(&mut self, name: &str) -> Result<CmdResult> {
        let quantity_text = self.config.default_quantity.clone();
        self.add(name, &quantity_text)
    }

    pub fn begin_edit(&mut self, id: ItemId) -> Result<CmdResult> {
        let outcome = commands::edit::begin(&mut self.store, id);
        self.notify(outcome)
    }

    pub fn commit_edit(
        &mut self,
        id: ItemId,
        name: &str,
        quantity_text: &str,
    ) -> Result<CmdResult> {
        let edit = ItemEdit::new(id, name, quantity_text);
        let outcome = commands::edit::commit(&mut self.store, &edit);
        self.notify(outcome)
    }

    pub fn delete(&mut self, id: ItemId) -> Result<CmdResult> {
        let outcome = commands::delete::run(&mut self.store, id);
        self.notify(outcome)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.store.get_item(id)
    }

    /// The item currently in editing mode, if any.
    pub fn editing(&self) -> Option<&Item> {
        self.store.items().iter().find(|item| item.editing)
    }

    pub fn len(&self) -> usize {
        self.store.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.items().is_empty()
    }

    pub fn config(&self) -> &ShoplistConfig {
        &self.config
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ListEvent) + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn notify(&mut self, outcome: Result<CmdResult>) -> Result<CmdResult> {
        if self.subscribers.is_empty() {
            return outcome;
        }
        match &outcome {
            Ok(result) if result.changed => {
                self.subscribers.emit(&ListEvent::Changed {
                    items: result.listed_items.clone(),
                });
            }
            Err(ShopError::Validation(error)) => {
                self.subscribers.emit(&ListEvent::ValidationFailed {
                    error: error.clone(),
                    notice: self.config.validation_notice.clone(),
                });
            }
            _ => {}
        }
        outcome
    }
}

/// Show or change settings stored in `config_dir`.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::events::{ListEvent, SubscriptionId};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(store: &mut ListStateStore) -> Rc<RefCell<Vec<ListEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn add_dispatches_and_notifies() {
        let mut store = ListStateStore::in_memory(ShoplistConfig::default());
        let events = recording(&mut store);

        let result = store.add("Milk", "2").unwrap();
        assert_eq!(result.listed_items.len(), 1);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ListEvent::Changed { items } => assert_eq!(items[0].name, "Milk"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn rejected_add_emits_configured_notice() {
        let config = ShoplistConfig {
            validation_notice: "Fill in both fields".into(),
            ..ShoplistConfig::default()
        };
        let mut store = ListStateStore::in_memory(config);
        let events = recording(&mut store);

        let err = store.add("", "1").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::BlankName));
        assert!(store.is_empty());
        assert_eq!(
            *events.borrow(),
            [ListEvent::ValidationFailed {
                error: ValidationError::BlankName,
                notice: "Fill in both fields".into(),
            }]
        );
    }

    #[test]
    fn noops_emit_nothing() {
        let mut store = ListStateStore::in_memory(ShoplistConfig::default());
        store.add("Milk", "1").unwrap();
        let events = recording(&mut store);

        store.delete(ItemId(99)).unwrap();
        store.commit_edit(ItemId(99), "X", "1").unwrap();
        store.list().unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn edit_cycle_updates_editing_state() {
        let mut store = ListStateStore::in_memory(ShoplistConfig::default());
        store.add("Milk", "1").unwrap();
        store.add("Eggs", "6").unwrap();

        let draft = store.begin_edit(ItemId(2)).unwrap().draft.unwrap();
        assert_eq!(draft.quantity_text, "6");
        assert_eq!(store.editing().map(|i| i.id), Some(ItemId(2)));

        store.commit_edit(ItemId(2), "Eggs", "12").unwrap();
        assert!(store.editing().is_none());
        assert_eq!(store.get(ItemId(2)).unwrap().quantity, 12);
    }

    #[test]
    fn rejected_commit_keeps_item_editing() {
        let mut store = ListStateStore::in_memory(ShoplistConfig::default());
        store.add("Milk", "2").unwrap();
        store.begin_edit(ItemId(1)).unwrap();
        let events = recording(&mut store);

        let err = store.commit_edit(ItemId(1), "Milk", "0").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::NonPositiveQuantity(0)));

        let item = store.get(ItemId(1)).unwrap();
        assert!(item.editing);
        assert_eq!(item.quantity, 2);
        assert_eq!(
            *events.borrow(),
            [ListEvent::ValidationFailed {
                error: ValidationError::NonPositiveQuantity(0),
                notice: "Please enter details".into(),
            }]
        );
    }

    #[test]
    fn add_with_default_quantity_uses_config() {
        let config = ShoplistConfig {
            default_quantity: "3".into(),
            ..ShoplistConfig::default()
        };
        let mut store = ListStateStore::in_memory(config);
        store.add_with_default_quantity("Apples").unwrap();
        assert_eq!(store.items()[0].quantity, 3);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = ListStateStore::in_memory(ShoplistConfig::default());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add("Milk", "1").unwrap();
        assert!(store.unsubscribe(id));
        store.add("Eggs", "1").unwrap();
        assert_eq!(*count.borrow(), 1);
    }
}
