pub mod auth;
pub mod hackathon;
pub mod job;
pub mod mentor;
pub mod promotion;
