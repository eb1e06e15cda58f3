pub mod account;
pub mod auth;
pub mod prefs;
pub mod records;
pub mod server;
