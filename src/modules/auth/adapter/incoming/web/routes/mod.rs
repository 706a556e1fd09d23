pub mod check_admin;
pub mod login_user;
pub mod register_user;

pub use check_admin::*;
pub use login_user::*;
pub use register_user::*;
