pub mod hackathon_query;
pub mod hackathon_repository;

pub use hackathon_query::{HackathonQuery, HackathonQueryError};
pub use hackathon_repository::{HackathonPostData, HackathonRepository, HackathonRepositoryError};
