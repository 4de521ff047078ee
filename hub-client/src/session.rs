//! The signed-in user, passed explicitly to every operation that needs it.

use hub_core::UserProfile;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SignIn { user: UserProfile, token: String },
    SignOut,
    /// Replaces the stored profile with a fresher copy of the same user.
    Update(UserProfile),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    user: Option<UserProfile>,
    token: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: SessionAction) {
        match action {
            SessionAction::SignIn { user, token } => {
                debug!(user_id = %user.id, "session signed in");
                self.user = Some(user);
                self.token = Some(token);
            }
            SessionAction::SignOut => {
                debug!("session signed out");
                self.user = None;
                self.token = None;
            }
            SessionAction::Update(profile) => match &mut self.user {
                Some(current) if current.id == profile.id => *current = profile,
                _ => debug!(user_id = %profile.id, "ignoring update for another user"),
            },
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::profile;

    #[test]
    fn sign_in_update_sign_out() {
        let mut session = SessionStore::new();
        let ada = profile("ada");
        assert!(!session.is_signed_in());

        session.dispatch(SessionAction::SignIn {
            user: ada.clone(),
            token: "token".to_string(),
        });
        assert_eq!(session.user_id(), Some(ada.id));

        let mut renamed = ada.clone();
        renamed.full_name = "Ada King".to_string();
        session.dispatch(SessionAction::Update(renamed));
        assert_eq!(session.current_user().unwrap().full_name, "Ada King");

        session.dispatch(SessionAction::SignOut);
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn update_for_a_different_user_is_ignored() {
        let mut session = SessionStore::new();
        let ada = profile("ada");
        session.dispatch(SessionAction::SignIn {
            user: ada.clone(),
            token: "token".to_string(),
        });

        session.dispatch(SessionAction::Update(profile("grace")));

        assert_eq!(session.current_user(), Some(&ada));
    }
}
