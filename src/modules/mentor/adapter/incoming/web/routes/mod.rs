mod apply_as_mentor;
mod list_mentors;

pub use apply_as_mentor::apply_as_mentor_handler;
pub use list_mentors::list_mentors_handler;
