use crate::error::Result;
use crate::model::{Item, User};
use crate::store::RecordStore;
use uuid::Uuid;

/// Outcome of an ownership lookup. A missing item and an item owned by
/// someone else are deliberately indistinguishable, so one user can never
/// probe for the existence of another's items.
#[derive(Debug)]
pub enum Resolution {
    Found(Item),
    Unavailable,
}

pub fn resolve_owned<S: RecordStore>(store: &S, user: &User, item_id: Uuid) -> Result<Resolution> {
    Ok(match store.find_item_for_owner(item_id, &user.username)? {
        Some(item) => Resolution::Found(item),
        None => Resolution::Unavailable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_owned_item() {
        let mut fixture = StoreFixture::new().with_user("alice");
        let id = fixture.add_item("Bolts", 10, 0.5, "alice");
        let alice = User::new("alice");

        let resolution = resolve_owned(&fixture.store, &alice, id).unwrap();
        assert!(matches!(resolution, Resolution::Found(item) if item.name == "Bolts"));
    }

    #[test]
    fn missing_and_foreign_items_resolve_identically() {
        let mut fixture = StoreFixture::new().with_user("alice").with_user("bob");
        let id = fixture.add_item("Bolts", 10, 0.5, "alice");
        let bob = User::new("bob");

        let foreign = resolve_owned(&fixture.store, &bob, id).unwrap();
        let missing = resolve_owned(&fixture.store, &bob, Uuid::new_v4()).unwrap();
        assert!(matches!(foreign, Resolution::Unavailable));
        assert!(matches!(missing, Resolution::Unavailable));
    }
}
