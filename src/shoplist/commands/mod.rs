use crate::config::ShoplistConfig;
use crate::model::{EditDraft, Item, ItemId};

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a command.
///
/// `listed_items` is the whole list after the command ran, in display order.
/// `changed` is false for no-ops, which is what decides whether subscribers
/// get notified.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub draft: Option<EditDraft>,
    pub config: Option<ShoplistConfig>,
    pub messages: Vec<CmdMessage>,
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_draft(mut self, draft: EditDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_config(mut self, config: ShoplistConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }
}

/// New values for an item being edited, as typed by the user.
#[derive(Debug, Clone)]
pub struct ItemEdit {
    pub id: ItemId,
    pub name: String,
    pub quantity_text: String,
}

impl ItemEdit {
    pub fn new(id: ItemId, name: impl Into<String>, quantity_text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity_text: quantity_text.into(),
        }
    }
}
