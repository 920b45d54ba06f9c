use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Quantity used when the quantity text does not parse as an integer.
pub const DEFAULT_QUANTITY: i32 = 1;

/// Identifier of an item, unique for the lifetime of a list.
///
/// Ids come from a monotonic counter owned by the store and are never reused,
/// so deleting an item can never make a later id collide with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ItemId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub editing: bool,
}

impl Item {
    pub fn new(id: ItemId, name: String, quantity: u32) -> Self {
        Self {
            id,
            name,
            quantity,
            editing: false,
        }
    }

    /// Pre-filled editor values for this item.
    pub fn draft(&self) -> EditDraft {
        EditDraft {
            id: self.id,
            name: self.name.clone(),
            quantity_text: self.quantity.to_string(),
        }
    }
}

/// The values an inline editor starts from when an item enters editing mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    pub id: ItemId,
    pub name: String,
    pub quantity_text: String,
}

/// Parses quantity text as entered by the user.
///
/// Text is not trimmed. Anything that is not a valid `i32` (empty, letters,
/// whitespace, overflow) falls back to [`DEFAULT_QUANTITY`].
pub fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(DEFAULT_QUANTITY)
}

/// Checks a name and raw quantity text, returning the validated quantity.
pub fn validate_entry(name: &str, quantity_text: &str) -> Result<u32, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    let quantity = parse_quantity(quantity_text);
    if quantity <= 0 {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    Ok(quantity as u32)
}
