use dxg_core::Step;

use super::append_blocks;
use crate::dom::{Document, Element, NodeId};

/// Render numbered steps, each with its sub-steps as a bullet list.
pub fn render_steps(doc: &mut Document, container: Option<NodeId>, steps: &[Step]) -> usize {
    let blocks = steps.iter().enumerate().map(|(index, step)| {
        let heading = format!("{}. {}", index + 1, step.title);
        let sub_steps = step.sub_steps.iter().map(|s| Element::new("li").text(s));
        Element::new("div")
            .class("dx-step")
            .child(Element::new("h3").text(heading))
            .child(Element::new("p").text(step.description.as_str()))
            .child(Element::new("ul").children(sub_steps))
    });
    append_blocks(doc, container, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(title: &str, subs: &[&str]) -> Step {
        Step {
            title: title.to_string(),
            description: format!("{title}の説明"),
            sub_steps: subs.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn numbers_steps_from_one() {
        let mut doc = Document::new();
        let root = doc.root();
        let steps = vec![step("現状分析", &["a", "b"]), step("計画", &[])];

        assert_eq!(render_steps(&mut doc, Some(root), &steps), 2);

        let headings: Vec<String> = doc
            .descendants(root)
            .into_iter()
            .filter(|id| doc.tag(*id) == Some("h3"))
            .map(|id| doc.text_content(id))
            .collect();
        assert_eq!(headings, vec!["1. 現状分析", "2. 計画"]);
    }

    #[test]
    fn renders_sub_steps_as_list_items() {
        let mut doc = Document::new();
        let root = doc.root();
        let steps = [step("現状分析", &["ヒアリング", "可視化"])];
        render_steps(&mut doc, Some(root), &steps);

        let block = doc.children(root)[0];
        assert_eq!(
            doc.to_html(block),
            "<div class=\"dx-step\"><h3>1. 現状分析</h3><p>現状分析の説明</p>\
             <ul><li>ヒアリング</li><li>可視化</li></ul></div>"
        );
    }

    #[test]
    fn missing_container_is_noop() {
        let mut doc = Document::new();
        assert_eq!(render_steps(&mut doc, None, &[step("x", &[])]), 0);
        assert!(doc.children(doc.root()).is_empty());
    }
}
