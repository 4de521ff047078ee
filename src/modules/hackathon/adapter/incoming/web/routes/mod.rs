mod create_hackathon_post;
mod delete_hackathon_post;
mod list_hackathon_posts;
mod update_hackathon_post;

pub use create_hackathon_post::create_hackathon_post_handler;
pub use delete_hackathon_post::delete_hackathon_post_handler;
pub use list_hackathon_posts::list_hackathon_posts_handler;
pub use update_hackathon_post::update_hackathon_post_handler;
