pub mod mentor_query;
pub mod mentor_repository;

pub use mentor_query::{MentorQuery, MentorQueryError};
pub use mentor_repository::{MentorApplicationData, MentorRepository, MentorRepositoryError};
