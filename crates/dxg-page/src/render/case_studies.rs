use dxg_core::CaseStudy;

use super::append_blocks;
use crate::dom::{Document, Element, NodeId};

/// Field labels, in display order: industry, challenge, solution, result.
pub const CASE_STUDY_LABELS: [&str; 4] = ["業界:", "課題:", "解決策:", "結果:"];

/// Render one block per case study with four labelled fields.
pub fn render_case_studies(
    doc: &mut Document,
    container: Option<NodeId>,
    studies: &[CaseStudy],
) -> usize {
    let blocks = studies.iter().map(|study| {
        let values = [
            &study.industry,
            &study.challenge,
            &study.solution,
            &study.result,
        ];
        let fields = CASE_STUDY_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| labelled_field(label, value));
        Element::new("div")
            .class("case-study")
            .child(Element::new("h3").text(study.company.as_str()))
            .children(fields)
    });
    append_blocks(doc, container, blocks)
}

fn labelled_field(label: &str, value: &str) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(label))
        .text(format!(" {value}"))
}
