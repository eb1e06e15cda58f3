// handlers/public/mod.rs - endpoints reachable without a token
//
// Account creation, token acquisition, and service status.
pub mod auth;
pub mod system;

pub use system::{health, root};
