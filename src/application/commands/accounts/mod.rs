mod login;
mod password;
mod register;
mod service;

pub use login::LoginCommand;
pub use register::RegisterAccountCommand;
pub use service::AccountCommandService;
