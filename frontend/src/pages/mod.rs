// frontend/src/pages/mod.rs
//
// Page-level renderers, one per route. Each takes the container it renders
// into plus a read-only view of the state.

pub mod career_plan;
pub mod dashboard;
pub mod evaluation;
pub mod login;
pub mod profile;
pub mod register;
