//! Communication Hub data contract.
//!
//! The hub itself is an external collaborator; the storefront only carries
//! the group/message shapes and the role-visibility rule it consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zarurat_core::{GroupId, MessageId, MessageKind, Role, UserId};

/// A single message inside a chat group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// An organizational chat group with role-restricted membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatGroup {
    pub id: GroupId,
    pub name: String,
    pub allowed_roles: Vec<Role>,
    pub messages: Vec<Message>,
    pub icon: String,
    pub description: String,
}

impl ChatGroup {
    /// Whether a user with `role` may see this group.
    #[must_use]
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}
