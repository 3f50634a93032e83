use dxg_core::{ToolTech, group_by_category};

use super::append_blocks;
use crate::dom::{Document, Element, NodeId};

/// Render tools grouped under one heading per category.
///
/// Categories appear in first-seen order and items keep their input order,
/// so the output is stable for any input permutation within a category.
pub fn render_tools_tech(
    doc: &mut Document,
    container: Option<NodeId>,
    tools: &[ToolTech],
) -> usize {
    let blocks = group_by_category(tools).into_iter().map(|group| {
        let items = group.items.into_iter().map(|item| {
            Element::new("div")
                .class("tool-tech-item")
                .child(Element::new("h4").text(item.name.as_str()))
                .child(Element::new("p").text(item.description.as_str()))
        });
        Element::new("div")
            .class("tool-tech-category")
            .child(Element::new("h3").text(group.category))
            .children(items)
    });
    append_blocks(doc, container, blocks)
}
