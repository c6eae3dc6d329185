use crate::commands::{CmdMessage, CmdResult, TxnAction, TxnRequest};
use crate::error::Result;
use crate::model::User;
use crate::store::RecordStore;
use chrono::Utc;

use super::helpers::{resolve_owned, Resolution};

/// Log an add/remove transaction against one of the user's items.
///
/// Exactly one commit-or-rollback boundary wraps the operation: the staged
/// quantity change is committed on success, and any storage failure rolls
/// back before the error result is returned, so the stored quantity never
/// changes on an error path and never goes negative.
pub fn run<S: RecordStore>(store: &mut S, user: &User, request: &TxnRequest) -> Result<CmdResult> {
    match apply(store, user, request) {
        Ok(result) => Ok(result),
        Err(err) => {
            store.rollback()?;
            Ok(CmdResult::error(format!(
                "Error occurred while logging item transaction: {err}"
            )))
        }
    }
}

fn apply<S: RecordStore>(store: &mut S, user: &User, request: &TxnRequest) -> Result<CmdResult> {
    if request.amount <= 0 {
        return Ok(CmdResult::error("Amount must be a positive integer."));
    }

    let mut item = match resolve_owned(store, user, request.item_id)? {
        Resolution::Found(item) => item,
        Resolution::Unavailable => {
            return Ok(CmdResult::error(
                "Item not found or you do not have permission.",
            ))
        }
    };

    let mut result = CmdResult::default();
    match request.action.parse::<TxnAction>() {
        Ok(TxnAction::Add) => {
            item.quantity += request.amount;
            result.add_message(CmdMessage::info(format!(
                "Added {} to {}. New quantity: {}",
                request.amount, item.name, item.quantity
            )));
        }
        Ok(TxnAction::Remove) => {
            if item.quantity >= request.amount {
                item.quantity -= request.amount;
                result.add_message(CmdMessage::info(format!(
                    "Removed {} from {}. New quantity: {}",
                    request.amount, item.name, item.quantity
                )));
            } else {
                return Ok(CmdResult::error(format!(
                    "Not enough quantity available for {}.",
                    item.name
                )));
            }
        }
        Err(_) => {
            return Ok(CmdResult::error(
                "Invalid action. Please specify 'add' or 'remove'.",
            ))
        }
    }

    item.updated_at = Utc::now();
    store.save_item(&item)?;
    store.commit()?;

    result.add_message(CmdMessage::success("Transaction logged successfully."));
    result.affected_items.push(item);
    Ok(result)
}
