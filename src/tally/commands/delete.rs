use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::store::RecordStore;
use uuid::Uuid;

use super::helpers::{resolve_owned, Resolution};

/// Remove an owned item from the ledger. Deletion is terminal: the id is no
/// longer resolvable afterwards.
pub fn run<S: RecordStore>(store: &mut S, user: &User, item_id: Uuid) -> Result<CmdResult> {
    let item = match resolve_owned(store, user, item_id)? {
        Resolution::Found(item) => item,
        Resolution::Unavailable => return Ok(CmdResult::error("Item not found.")),
    };

    if let Err(err) = store.delete_item(item.id).and_then(|()| store.commit()) {
        store.rollback()?;
        return Ok(CmdResult::error(format!(
            "Error occurred while deleting the item: {err}"
        )));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item deleted: {}", item.name)));
    result.affected_items.push(item);
    Ok(result)
}
