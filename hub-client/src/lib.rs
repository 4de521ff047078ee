//! Headless client core for the builder hub.
//!
//! Holds the state a UI binds to: the signed-in session, form controllers,
//! list views with their query state, and transient notifications. All
//! network access goes through [`BackendApi`].

pub mod api;
pub mod collaborate;
pub mod config;
pub mod error;
pub mod forms;
pub mod jobs;
pub mod mutation;
pub mod notification;
pub mod promotions;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{BackendApi, HttpBackend};
pub use collaborate::CollaborateBoard;
pub use config::ClientConfig;
pub use error::ClientError;
pub use forms::{AfterSubmit, FormController, FormView, SubmitError};
pub use jobs::JobBoard;
pub use mutation::Mutation;
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use promotions::PromotionFeed;
pub use session::{SessionAction, SessionStore};
