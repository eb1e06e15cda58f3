// handlers/protected/mod.rs - endpoints behind jwt_auth_middleware
//
// Every handler here receives `Extension<AuthUser>` and passes its user_id as
// the owner of whatever it reads or writes.
pub mod account;
pub mod dashboard;
pub mod expenses;
pub mod income_sources;
pub mod loans;
pub mod preferences;
pub mod records;
pub mod savings_goals;
pub mod tuition;
