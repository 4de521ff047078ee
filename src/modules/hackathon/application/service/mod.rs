mod create_hackathon_post_service;
mod delete_hackathon_post_service;
mod list_hackathon_posts_service;
mod update_hackathon_post_service;

pub use create_hackathon_post_service::CreateHackathonPostService;
pub use delete_hackathon_post_service::DeleteHackathonPostService;
pub use list_hackathon_posts_service::ListHackathonPostsService;
pub use update_hackathon_post_service::UpdateHackathonPostService;
