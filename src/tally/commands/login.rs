use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::store::RecordStore;

/// Resolve a username to a user, creating it on first login.
pub fn run<S: RecordStore>(store: &mut S, username: &str) -> Result<CmdResult> {
    let username = username.trim();
    if username.is_empty() {
        return Ok(CmdResult::error("Username must not be empty."));
    }

    let user = match store.find_user(username)? {
        Some(user) => user,
        None => {
            let user = User::new(username);
            if let Err(err) = store.insert_user(&user).and_then(|()| store.commit()) {
                store.rollback()?;
                return Ok(CmdResult::error(format!(
                    "Error occurred while creating the user: {err}"
                )));
            }
            let mut result = CmdResult::default().with_user(user);
            result.add_message(CmdMessage::info(format!("Welcome, {username}.")));
            return Ok(result);
        }
    };

    Ok(CmdResult::default().with_user(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_login_creates_the_user() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "alice").unwrap();
        assert!(!result.is_error());
        assert_eq!(result.user.unwrap().username, "alice");
        assert!(store.committed().users.contains_key("alice"));
    }

    #[test]
    fn second_login_returns_the_existing_user() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store, "alice").unwrap().user.unwrap();
        let second = run(&mut store, "alice").unwrap().user.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.committed().users.len(), 1);
    }

    #[test]
    fn blank_usernames_are_rejected() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "   ").unwrap();
        assert!(result.is_error());
        assert!(store.committed().users.is_empty());
    }
}
