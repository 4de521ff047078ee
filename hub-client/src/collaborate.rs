//! The collaborate page: hackathon teammate posts and the founder directory,
//! filtered locally through the shared list-query pipeline.

use futures::future::join;
use hub_core::query::{FounderParams, FounderQuery, HackathonPostParams, HackathonPostQuery};
use hub_core::{HackathonPost, UserProfile};
use tracing::warn;
use uuid::Uuid;

use crate::api::BackendApi;
use crate::notification::NotificationCenter;
use crate::session::SessionStore;

#[derive(Debug, Default)]
pub struct CollaborateBoard {
    posts: Vec<HackathonPost>,
    founders: Vec<UserProfile>,
    pub post_query: HackathonPostQuery,
    pub founder_query: FounderQuery,
    loading: bool,
    deleting: Option<Uuid>,
}

impl CollaborateBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self, id: Uuid) -> bool {
        self.deleting == Some(id)
    }

    pub fn posts(&self) -> &[HackathonPost] {
        &self.posts
    }

    /// Fetches posts and users concurrently. A failed half keeps its
    /// previous contents.
    pub async fn load(&mut self, api: &dyn BackendApi, notifications: &mut NotificationCenter) {
        self.loading = true;
        let post_params = HackathonPostParams::default();
        let founder_params = FounderParams::default();
        let (posts, users) = join(
            api.list_hackathon_posts(&post_params),
            api.list_users(&founder_params),
        )
        .await;

        match posts {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                warn!(error = %err, "failed to load hackathon posts");
                notifications.error(err.to_string());
            }
        }
        match users {
            Ok(users) => self.founders = users,
            Err(err) => {
                warn!(error = %err, "failed to load founders");
                notifications.error(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn visible_posts(&self, session: &SessionStore) -> Vec<HackathonPost> {
        self.post_query.apply(&self.posts, session.user_id())
    }

    pub fn visible_founders(&self) -> Vec<UserProfile> {
        self.founder_query.apply(&self.founders)
    }

    /// Inserts or replaces a post after a create or edit was confirmed.
    pub fn upsert_post(&mut self, post: HackathonPost) {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => *slot = post,
            None => self.posts.push(post),
        }
    }

    pub async fn delete_post(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
    ) {
        let (Some(token), Some(me)) = (session.token(), session.user_id()) else {
            notifications.error("Please login to delete a post");
            return;
        };
        let owned = self
            .posts
            .iter()
            .find(|p| p.id == id)
            .is_some_and(|p| p.is_owned_by(me));
        if !owned {
            notifications.error("You can only delete your own posts");
            return;
        }
        if self.deleting.is_some() {
            return;
        }

        self.deleting = Some(id);
        match api.delete_hackathon_post(token, id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                notifications.success("Post deleted");
            }
            Err(err) => {
                notifications.error(err.to_string());
            }
        }
        self.deleting = None;
    }
}
