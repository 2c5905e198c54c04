pub mod user_response;
pub mod login_response;

pub use user_response::UserResponse;
pub use login_response::LoginResponse;
