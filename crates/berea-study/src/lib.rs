//! Study tools — plan generation and cross-reference lookup over fixed
//! in-memory tables.

pub mod crossrefs;
pub mod plans;

pub use crossrefs::{cross_references, cross_references_for};
pub use plans::{generate_plan, StudyPlanDay, DEFAULT_TOPIC};
