//! Frontend Models
//!
//! Wire types for the command endpoint and the item data read from markup.

use serde::{Deserialize, Serialize};

use crate::config::{ActiveIdRule, PayloadShape};
use crate::error::DispatchError;

pub const ATTR_ITEM_ID: &str = "data-itemid";
pub const ATTR_SESSION_ID: &str = "data-sessionid";
pub const ATTR_TYPE: &str = "data-type";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISITED: &str = "visited";

/// Dataset of an interactive element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemData {
    pub item_id: String,
    pub session_id: Option<String>,
    pub item_type: Option<String>,
}

impl ItemData {
    #[cfg(test)]
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            session_id: None,
            item_type: None,
        }
    }

    #[cfg(test)]
    pub fn with_session(mut self, session_id: impl Into<String>, item_type: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self.item_type = Some(item_type.into());
        self
    }

    /// Read the dataset through an attribute lookup.
    /// Returns None when `data-itemid` is absent.
    pub fn from_attributes<F>(attr: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Some(Self {
            item_id: attr(ATTR_ITEM_ID)?,
            session_id: attr(ATTR_SESSION_ID),
            item_type: attr(ATTR_TYPE),
        })
    }

    /// DOM id of the element to mark active, if the rule can be satisfied
    pub fn active_element_id(&self, rule: ActiveIdRule) -> Option<String> {
        match rule {
            ActiveIdRule::ItemId => Some(self.item_id.clone()),
            ActiveIdRule::Composite => {
                let item_type = self.item_type.as_deref()?;
                let session_id = self.session_id.as_deref()?;
                Some(format!("{}{}{}", item_type, session_id, self.item_id))
            }
        }
    }
}

/// Body of `POST /pepper/send_command`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandRequest {
    Item {
        item_id: String,
    },
    Session {
        session_id: i64,
        item_type: String,
        item_id: i64,
    },
}

impl CommandRequest {
    /// Build the request for `shape`, validating numeric fields up front
    pub fn from_item(shape: PayloadShape, item: &ItemData) -> Result<Self, DispatchError> {
        match shape {
            PayloadShape::Item => Ok(CommandRequest::Item {
                item_id: item.item_id.clone(),
            }),
            PayloadShape::Session => {
                let raw_session = item
                    .session_id
                    .as_deref()
                    .ok_or(DispatchError::MissingAttribute(ATTR_SESSION_ID))?;
                let item_type = item
                    .item_type
                    .clone()
                    .ok_or(DispatchError::MissingAttribute(ATTR_TYPE))?;
                let session_id = raw_session
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| DispatchError::InvalidSessionId(raw_session.to_string()))?;
                let item_id = item
                    .item_id
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| DispatchError::InvalidItemId(item.item_id.clone()))?;
                Ok(CommandRequest::Session {
                    session_id,
                    item_type,
                    item_id,
                })
            }
        }
    }
}

/// Body returned by the command endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommandResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpreted response
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<'a> {
    Message(&'a str),
    Error(&'a str),
    Empty,
}

impl CommandResponse {
    /// A non-empty message wins over an error; empty strings count as absent
    pub fn reply(&self) -> Reply<'_> {
        match (self.message.as_deref(), self.error.as_deref()) {
            (Some(message), _) if !message.is_empty() => Reply::Message(message),
            (_, Some(error)) if !error.is_empty() => Reply::Error(error),
            _ => Reply::Empty,
        }
    }
}

/// Handle of a rendered notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Message,
    Error,
}

impl NoticeKind {
    pub fn label(self) -> &'static str {
        match self {
            NoticeKind::Message => "message",
            NoticeKind::Error => "error",
        }
    }
}

/// Transient notification shown in the notifications container
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notification {
    pub fn css_class(&self) -> String {
        format!("notification-item {}", self.kind.label())
    }
}
