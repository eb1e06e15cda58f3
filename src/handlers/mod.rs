// handlers/mod.rs - handler tiers
//
// Public (no auth) → Protected (bearer JWT, owner-scoped)
pub mod public;
pub mod protected;
