//! # balm-engine
//!
//! Intervention selection policy and the end-to-end recommendation
//! pipeline: raw text → issue resolution → policy-filtered intervention
//! list.

pub mod engine;
pub mod selector;

pub use engine::{RecommendEngine, ReferenceData};
