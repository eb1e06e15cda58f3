// handlers/public/auth/mod.rs - token acquisition
mod login;
mod register;

pub use login::login_post;
pub use register::register_post;
