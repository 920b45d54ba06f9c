use colored::Colorize;
use shoplist::api::{CmdMessage, MessageLevel};
use shoplist::config::ShoplistConfig;
use shoplist::model::{EditDraft, Item};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 60;
const QTY_WIDTH: usize = 12;
const EDIT_MARKER: &str = "✎";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Transient notice for rejected input. Goes to stderr so it never mixes
/// with the rendered list.
pub(super) fn print_notice(notice: &str) {
    eprintln!("{}", notice.yellow());
}

pub(super) fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("{}", "The list is empty.".dimmed());
        return;
    }

    for item in items {
        let line = format_item_line(item);
        if item.editing {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_draft(draft: &EditDraft) {
    println!(
        "{} {} (qty {}) -- save {} <name> [quantity]",
        "Editing".yellow(),
        draft.name.bold(),
        draft.quantity_text,
        draft.id
    );
}

pub(super) fn print_config(config: &ShoplistConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key.bold(), value);
    }
}

/// One list row, without colors: `  1. Milk ........ Qty : 2`.
pub(super) fn format_item_line(item: &Item) -> String {
    let marker = if item.editing { EDIT_MARKER } else { " " };
    let prefix = format!("{} {:>3}. ", marker, item.id.to_string());
    let qty = format!("Qty : {}", item.quantity);

    let fixed_width = prefix.width() + QTY_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let name = truncate_to_width(&item.name, available);
    let padding = available.saturating_sub(name.width());

    format!(
        "{}{}{}{:>width$}",
        prefix,
        name,
        " ".repeat(padding),
        qty,
        width = QTY_WIDTH
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist::model::ItemId;

    #[test]
    fn item_line_has_fixed_width() {
        let item = Item::new(ItemId(1), "Milk".into(), 2);
        let line = format_item_line(&item);
        assert!(line.contains("1. Milk"));
        assert!(line.ends_with("Qty : 2"));
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn editing_item_is_marked() {
        let mut item = Item::new(ItemId(3), "Eggs".into(), 12);
        item.editing = true;
        assert!(format_item_line(&item).starts_with(EDIT_MARKER));
    }

    #[test]
    fn long_names_are_truncated() {
        let item = Item::new(ItemId(1), "x".repeat(200), 1);
        let line = format_item_line(&item);
        assert!(line.contains('…'));
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn truncation_counts_display_width() {
        assert_eq!(truncate_to_width("牛乳牛乳", 8), "牛乳牛乳");
        assert_eq!(truncate_to_width("牛乳牛乳", 5), "牛乳…");
    }
}
