//! # dxg-page
//!
//! The landing page side of dxguide: a small document model plus everything
//! that writes into it.
//!
//! - [`dom`]: arena document with the handful of DOM operations the page uses
//! - [`render`]: one renderer per content kind, appending blocks to a container
//! - [`grader`]: quiz answer checking against rendered radio groups
//! - [`animator`]: marker classes for elements scrolled into view
//! - [`loader`]: concurrent fetch-and-render of every kind on page-ready
//!
//! Record text is stored verbatim in the document and escaped only when the
//! document is serialized.

pub mod animator;
pub mod dom;
mod escape;
pub mod grader;
mod landing;
pub mod loader;
pub mod render;

pub use animator::{AnimatorSettings, IntersectionEntry, IntersectionTracker, VisibilityAnimator};
pub use dom::{Document, Element, Node, NodeId};
pub use grader::{Verdict, check_answer, check_button, click_check_button, grade, select_option};
pub use landing::{PAGE_TITLE, landing_document};
pub use loader::{LoadEntry, LoadOptions, LoadOutcome, LoadReport, load_kind, load_page, on_ready};
