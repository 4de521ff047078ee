mod get_profile_service;
mod list_users_service;
mod login_user_service;
mod register_user_service;
mod update_profile_service;

pub use get_profile_service::GetProfileService;
pub use list_users_service::ListUsersService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
