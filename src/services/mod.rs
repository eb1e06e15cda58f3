pub mod account;
pub mod dashboard;

pub use account::AccountService;
pub use dashboard::{Dashboard, Profile};
