//! Domain reducers. The root `update.rs` offers every message to each of
//! them in turn; the first one that recognises it wins.

pub mod career_plan;
pub mod dashboard;
pub mod evaluation;
pub mod navigation;
pub mod profile;
pub mod session;
