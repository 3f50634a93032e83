//! Content renderers, one per record shape.
//!
//! Every renderer takes its target container explicitly. A `None` container
//! is a silent no-op, matching a page that omits that section. Each returns
//! the number of top-level blocks appended.

mod case_studies;
mod checklist;
mod quiz;
mod steps;
mod tools;

pub use case_studies::{CASE_STUDY_LABELS, render_case_studies};
pub use checklist::render_checklist;
pub use quiz::{CHECK_BUTTON_LABEL, radio_group, render_quiz, result_slot_id};
pub use steps::render_steps;
pub use tools::render_tools_tech;

use crate::dom::{Document, Element, NodeId};

/// Append `blocks` to `container` in order.
fn append_blocks(
    doc: &mut Document,
    container: Option<NodeId>,
    blocks: impl IntoIterator<Item = Element>,
) -> usize {
    let Some(container) = container else {
        return 0;
    };
    let mut count = 0;
    for block in blocks {
        doc.append(container, block);
        count += 1;
    }
    count
}
