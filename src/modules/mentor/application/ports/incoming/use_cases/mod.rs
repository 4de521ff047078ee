mod apply_as_mentor;
mod list_mentors;

pub use apply_as_mentor::{ApplyAsMentorError, ApplyAsMentorUseCase};
pub use list_mentors::{ListMentorsError, ListMentorsUseCase};
