//! Promotion feed with server-confirmed like/dislike.

use std::collections::HashMap;

use hub_core::{PromotionPost, Reaction};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::BackendApi;
use crate::error::ClientError;
use crate::mutation::Mutation;
use crate::notification::NotificationCenter;
use crate::session::SessionStore;

pub const LOGIN_TO_REACT: &str = "Please login to like or dislike a promotion";

#[derive(Debug, Default)]
pub struct PromotionFeed {
    posts: Vec<PromotionPost>,
    loading: bool,
    reactions: HashMap<Uuid, Mutation<Reaction>>,
    deleting: Option<Uuid>,
}

impl PromotionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[PromotionPost] {
        &self.posts
    }

    pub fn post(&self, id: Uuid) -> Option<&PromotionPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_reacting(&self, id: Uuid) -> bool {
        self.reactions.get(&id).is_some_and(Mutation::is_pending)
    }

    pub fn pending_reactions(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_deleting(&self, id: Uuid) -> bool {
        self.deleting == Some(id)
    }

    pub async fn load(&mut self, api: &dyn BackendApi, notifications: &mut NotificationCenter) {
        self.loading = true;
        match api.list_promotions().await {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                warn!(error = %err, "failed to load promotions");
                notifications.error(err.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn load_mine(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
    ) {
        let Some(token) = session.token() else {
            notifications.info("Please login to see your promotions");
            return;
        };
        self.loading = true;
        match api.my_promotions(token).await {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                notifications.error(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Puts a freshly created post at the top of the feed.
    pub fn prepend(&mut self, post: PromotionPost) {
        self.posts.retain(|p| p.id != post.id);
        self.posts.insert(0, post);
    }

    pub async fn handle_like(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
    ) {
        self.react(api, session, notifications, id, Reaction::Like).await;
    }

    pub async fn handle_dislike(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
    ) {
        self.react(api, session, notifications, id, Reaction::Dislike)
            .await;
    }

    async fn react(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
        reaction: Reaction,
    ) {
        let Some(token) = self.begin_reaction(session, notifications, id, reaction) else {
            return;
        };
        let outcome = api.react(&token, id, reaction).await;
        self.finish_reaction(notifications, id, reaction, outcome);
    }

    /// Checks the preconditions and marks the reaction pending. Returns the
    /// token to send with, or `None` when nothing should be sent.
    pub fn begin_reaction(
        &mut self,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
        reaction: Reaction,
    ) -> Option<String> {
        let Some(token) = session.token() else {
            notifications.error(LOGIN_TO_REACT);
            return None;
        };
        if !self.reactions.entry(id).or_default().begin() {
            debug!(%id, reaction = reaction.as_str(), "reaction already pending");
            return None;
        }
        Some(token.to_string())
    }

    /// Replaces the local post with the server copy on success. On failure
    /// the feed is left as it was.
    pub fn finish_reaction(
        &mut self,
        notifications: &mut NotificationCenter,
        id: Uuid,
        reaction: Reaction,
        outcome: Result<PromotionPost, ClientError>,
    ) {
        // Only in-flight reactions are tracked.
        self.reactions.remove(&id);
        match outcome {
            Ok(updated) => {
                debug!(%id, reaction = reaction.as_str(), "reaction confirmed");
                if let Some(slot) = self.posts.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => {
                notifications.error(err.to_string());
            }
        }
    }

    pub async fn delete(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
    ) {
        let (Some(token), Some(me)) = (session.token(), session.user_id()) else {
            notifications.error("Please login to delete a promotion");
            return;
        };
        if !self.post(id).is_some_and(|p| p.user == me) {
            notifications.error("You can only delete your own promotions");
            return;
        }
        if self.deleting.is_some() {
            return;
        }

        self.deleting = Some(id);
        match api.delete_promotion(token, id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                notifications.success("Promotion deleted");
            }
            Err(err) => {
                notifications.error(err.to_string());
            }
        }
        self.deleting = None;
    }
}
