mod get_profile;
mod list_users;
mod login_user;
mod register_user;
mod update_profile;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use login_user::{LoginUserError, LoginUserUseCase};
pub use register_user::{RegisterUserError, RegisterUserUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
