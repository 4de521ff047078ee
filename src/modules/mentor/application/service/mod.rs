mod apply_as_mentor_service;
mod list_mentors_service;

pub use apply_as_mentor_service::ApplyAsMentorService;
pub use list_mentors_service::ListMentorsService;
