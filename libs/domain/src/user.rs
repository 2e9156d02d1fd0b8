//! The acting user.

use serde::{Deserialize, Serialize};

/// A signed-in user. Linked to roster members by email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email_address: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            name: None,
        }
    }
}

/// Resolves the user making the current request.
pub trait UserAccessor: Send + Sync {
    /// `None` means the request is anonymous.
    fn current_user(&self) -> Option<User>;
}

/// Always resolves to the same user (or to nobody).
#[derive(Debug, Clone, Default)]
pub struct StaticUserAccessor(Option<User>);

impl StaticUserAccessor {
    pub fn user(email_address: impl Into<String>) -> Self {
        Self(Some(User::new(email_address)))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl UserAccessor for StaticUserAccessor {
    fn current_user(&self) -> Option<User> {
        self.0.clone()
    }
}
