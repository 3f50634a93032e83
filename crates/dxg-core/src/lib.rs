//! # dxg-core
//!
//! Core types shared across all dxguide crates:
//! - Content records decoded from the landing page's JSON documents
//! - The five content kinds with their data paths and container ids
//! - Quiz answer-index validation policy
//! - Child-combinator selectors for picking animation targets
//! - Cross-cutting error types

pub mod errors;
pub mod kind;
pub mod policy;
pub mod records;
pub mod selector;

pub use errors::CoreError;
pub use kind::ContentKind;
pub use policy::QuizAnswerPolicy;
pub use records::{
    CaseStudy, CategoryGroup, ChecklistItem, QuizQuestion, Step, ToolTech, group_by_category,
};
pub use selector::{ChildSelector, TagMatch};
