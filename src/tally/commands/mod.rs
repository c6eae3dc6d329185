use crate::error::{Result, TallyError};
use crate::model::{Item, User};
use std::str::FromStr;
use uuid::Uuid;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod login;
pub mod transact;
pub mod update;

/// Outcome of a core operation. Domain failures (validation, ownership,
/// insufficient quantity) are reported here rather than as `Err`; the
/// operation boundary converts every caught failure into an `Error` result
/// after rolling back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CmdStatus {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub status: CmdStatus,
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub user: Option<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    /// Error-status result carrying a single human-readable message.
    pub fn error(message: impl Into<String>) -> Self {
        let mut result = Self {
            status: CmdStatus::Error,
            ..Self::default()
        };
        result.add_message(CmdMessage::error(message));
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn is_error(&self) -> bool {
        self.status == CmdStatus::Error
    }

    /// Concatenated message text, handy for assertions and error displays.
    pub fn message_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Quantity-changing action on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnAction {
    Add,
    Remove,
}

impl FromStr for TxnAction {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(TxnAction::Add),
            "remove" => Ok(TxnAction::Remove),
            other => Err(TallyError::Validation(format!(
                "Invalid action: {other}"
            ))),
        }
    }
}

/// A fully specified transaction request. The three attributes travel
/// together: a partially supplied triple is rejected before dispatch.
#[derive(Debug, Clone)]
pub struct TxnRequest {
    pub item_id: Uuid,
    pub action: String,
    pub amount: i64,
}

impl TxnRequest {
    pub fn new(item_id: Uuid, action: impl Into<String>, amount: i64) -> Self {
        Self {
            item_id,
            action: action.into(),
            amount,
        }
    }

    pub fn from_parts(
        item_id: Option<Uuid>,
        action: Option<String>,
        amount: Option<i64>,
    ) -> Result<Self> {
        match (item_id, action, amount) {
            (Some(item_id), Some(action), Some(amount)) => Ok(Self {
                item_id,
                action,
                amount,
            }),
            _ => Err(TallyError::Validation(
                "All log item attributes (item_id, action, amount) must be provided.".to_string(),
            )),
        }
    }
}

/// A fully resolved update request. The item id is mandatory whenever any
/// new attribute is supplied, and the core only accepts all three fields as
/// concrete values; sourcing omitted fields is the interactive layer's job.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub item_id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl UpdateRequest {
    pub fn new(item_id: Uuid, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            item_id,
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn from_parts(
        item_id: Option<Uuid>,
        name: Option<String>,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<Self> {
        let any_field = name.is_some() || quantity.is_some() || price.is_some();
        let item_id = match item_id {
            Some(id) => id,
            None if any_field => {
                return Err(TallyError::Validation(
                    "If any new item attributes are provided, item_id must also be provided."
                        .to_string(),
                ))
            }
            None => {
                return Err(TallyError::Validation(
                    "An item_id must be provided.".to_string(),
                ))
            }
        };
        match (name, quantity, price) {
            (Some(name), Some(quantity), Some(price)) => Ok(Self {
                item_id,
                name,
                quantity,
                price,
            }),
            _ => Err(TallyError::Validation(
                "Update requires name, quantity, and price to be resolved.".to_string(),
            )),
        }
    }
}
