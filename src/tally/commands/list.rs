use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// List every item in the ledger, all owners included, in creation order.
/// Read-only; exists for the display layer and takes no part in mutation.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let mut items = store.list_items()?;
    items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(CmdResult::default().with_listed_items(items))
}
