use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Item, User};
use crate::store::RecordStore;

/// Create a new item owned by `user`.
///
/// Validation runs before anything is staged, so a rejected create leaves
/// nothing to roll back; only the storage path between save and commit needs
/// the rollback guard.
pub fn run<S: RecordStore>(
    store: &mut S,
    user: &User,
    name: &str,
    quantity: i64,
    price: f64,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(CmdResult::error("Item name must be provided."));
    }
    if quantity <= 0 {
        return Ok(CmdResult::error("Quantity must be a positive integer."));
    }
    // NaN fails this comparison too.
    if !(price > 0.0) {
        return Ok(CmdResult::error("Price must be a positive number."));
    }

    let item = Item::new(name, quantity, price, &user.username);
    if let Err(err) = store.save_item(&item).and_then(|()| store.commit()) {
        store.rollback()?;
        return Ok(CmdResult::error(format!(
            "Error occurred while creating the item: {err}"
        )));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item {} successfully created with ID {}.",
        item.name, item.id
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{FailingStore, StoreFixture};
    use crate::store::RecordStore;

    #[test]
    fn creates_item_owned_by_user() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        let result = run(&mut fixture.store, &alice, "Widget", 10, 9.99).unwrap();
        assert!(!result.is_error());

        let item = &result.affected_items[0];
        assert_eq!(item.owner, "alice");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.price, 9.99);
        assert!(fixture
            .store
            .find_item_for_owner(item.id, "alice")
            .unwrap()
            .is_some());
    }

    #[test]
    fn rejects_blank_name() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        let result = run(&mut fixture.store, &alice, "  ", 10, 9.99).unwrap();
        assert!(result.is_error());
        assert!(result.message_text().contains("Item name must be provided."));
        assert!(fixture.store.list_items().unwrap().is_empty());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        for quantity in [-5, 0] {
            let result = run(&mut fixture.store, &alice, "Widget", quantity, 9.99).unwrap();
            assert!(result.is_error());
            assert!(result.message_text().contains("Quantity must be a positive integer."));
        }
        assert!(fixture.store.list_items().unwrap().is_empty());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        for price in [-9.99, 0.0] {
            let result = run(&mut fixture.store, &alice, "Widget", 10, price).unwrap();
            assert!(result.is_error());
            assert!(result.message_text().contains("Price must be a positive number."));
        }
        assert!(fixture.store.list_items().unwrap().is_empty());
    }

    #[test]
    fn integral_price_values_are_accepted() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        let result = run(&mut fixture.store, &alice, "Widget", 10, 5.0).unwrap();
        assert!(!result.is_error());
        assert_eq!(result.affected_items[0].price, 5.0);
    }

    #[test]
    fn storage_failure_persists_nothing() {
        let fixture = StoreFixture::new().with_user("alice");
        let alice = User::new("alice");

        let mut store = FailingStore::new(fixture.store);
        store.fail_saves = true;

        let result = run(&mut store, &alice, "Widget", 10, 9.99).unwrap();
        assert!(result.is_error());
        assert!(result
            .message_text()
            .contains("Error occurred while creating the item:"));
        assert!(store.committed().items.is_empty());
    }
}
