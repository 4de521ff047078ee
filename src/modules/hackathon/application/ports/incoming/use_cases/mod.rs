mod create_hackathon_post;
mod delete_hackathon_post;
mod list_hackathon_posts;
mod update_hackathon_post;

pub use create_hackathon_post::{CreateHackathonPostError, CreateHackathonPostUseCase};
pub use delete_hackathon_post::{DeleteHackathonPostError, DeleteHackathonPostUseCase};
pub use list_hackathon_posts::{ListHackathonPostsError, ListHackathonPostsUseCase};
pub use update_hackathon_post::{UpdateHackathonPostError, UpdateHackathonPostUseCase};
