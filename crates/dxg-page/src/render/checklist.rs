use dxg_core::ChecklistItem;

use super::append_blocks;
use crate::dom::{Document, Element, NodeId};

/// Render one checkbox row per item. Checkbox state is never read back.
pub fn render_checklist(
    doc: &mut Document,
    container: Option<NodeId>,
    items: &[ChecklistItem],
) -> usize {
    let blocks = items.iter().enumerate().map(|(index, item)| {
        Element::new("div")
            .class("checklist-item")
            .child(
                Element::new("label")
                    .child(
                        Element::new("input")
                            .attr("type", "checkbox")
                            .id(format!("check-{index}")),
                    )
                    .text(format!(" {}", item.text)),
            )
            .child(
                Element::new("p")
                    .class("description")
                    .text(item.description.as_str()),
            )
    });
    append_blocks(doc, container, blocks)
}
