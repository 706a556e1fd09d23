pub mod login_user;
pub mod register_user;

pub use login_user::{
    LoginResult, LoginUserCommand, LoginUserCommandError, LoginUserError, LoginUserUseCase,
};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
    RegisteredUser,
};
