use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::PromotionPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }
}

impl PromotionPost {
    /// Toggles `reaction` for `user`.
    ///
    /// Reacting twice the same way withdraws the reaction; switching moves the
    /// user between lists. A user is never in both `likes` and `dislikes`.
    pub fn react(&mut self, user: Uuid, reaction: Reaction) {
        let (target, opposite) = match reaction {
            Reaction::Like => (&mut self.likes, &mut self.dislikes),
            Reaction::Dislike => (&mut self.dislikes, &mut self.likes),
        };

        if target.contains(&user) {
            target.retain(|id| *id != user);
        } else {
            opposite.retain(|id| *id != user);
            target.push(user);
        }

        self.recount();
    }

    pub fn reaction_of(&self, user: Uuid) -> Option<Reaction> {
        if self.likes.contains(&user) {
            Some(Reaction::Like)
        } else if self.dislikes.contains(&user) {
            Some(Reaction::Dislike)
        } else {
            None
        }
    }

    pub fn recount(&mut self) {
        self.number_of_likes = self.likes.len() as u32;
        self.number_of_dislikes = self.dislikes.len() as u32;
    }
}
