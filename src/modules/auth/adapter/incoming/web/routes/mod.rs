mod get_me;
mod list_users;
mod login_user;
mod register_user;
mod update_profile;

pub use get_me::{__path_get_me_handler, get_me_handler};
pub use list_users::{__path_list_users_handler, list_users_handler};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterRequestDto};
pub use update_profile::{__path_update_profile_handler, update_profile_handler, UpdateProfileRequestDto};
