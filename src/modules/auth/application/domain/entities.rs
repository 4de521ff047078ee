use hub_core::UserProfile;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Id of a registered user. Every owned record points at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user as stored, including what never leaves the server.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

impl UserAccount {
    pub fn id(&self) -> UserId {
        UserId::from(self.profile.id)
    }
}
