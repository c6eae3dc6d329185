use crate::commands::{CmdMessage, CmdResult, UpdateRequest};
use crate::error::Result;
use crate::model::User;
use crate::store::RecordStore;
use chrono::Utc;

use super::helpers::{resolve_owned, Resolution};

/// Replace an owned item's name, quantity, and price in one commit.
///
/// Quantity may be set to zero here (the invariant is non-negative, and
/// transactions can drain an item to zero anyway); a negative value is
/// rejected before anything is staged.
pub fn run<S: RecordStore>(store: &mut S, user: &User, request: &UpdateRequest) -> Result<CmdResult> {
    let name = request.name.trim();
    if name.is_empty() {
        return Ok(CmdResult::error("Item name must be provided."));
    }
    if request.quantity < 0 {
        return Ok(CmdResult::error("Quantity must not be negative."));
    }
    if !(request.price > 0.0) {
        return Ok(CmdResult::error("Price must be a positive number."));
    }

    let mut item = match resolve_owned(store, user, request.item_id)? {
        Resolution::Found(item) => item,
        Resolution::Unavailable => return Ok(CmdResult::error("Item not found.")),
    };

    item.name = name.to_string();
    item.quantity = request.quantity;
    item.price = request.price;
    item.updated_at = Utc::now();

    if let Err(err) = store.save_item(&item).and_then(|()| store.commit()) {
        store.rollback()?;
        return Ok(CmdResult::error(format!(
            "Error occurred while updating the item: {err}"
        )));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item updated: {}", item.name)));
    result.affected_items.push(item);
    Ok(result)
}
