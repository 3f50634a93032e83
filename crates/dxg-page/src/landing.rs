//! The static landing page skeleton that content is loaded into.

use dxg_core::ContentKind;

use crate::dom::{Document, Element};

pub const PAGE_TITLE: &str = "DX推進ガイド";
const PAGE_LEAD: &str = "デジタルトランスフォーメーションを段階的に進めるための実践ガイド";

/// Build the page as served before any content loads: a hero section, then
/// one section per content kind holding its heading and an empty container.
#[must_use]
pub fn landing_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    doc.append(
        root,
        Element::new("section").id("hero").child(
            Element::new("div")
                .class("hero-content")
                .child(Element::new("h1").text(PAGE_TITLE))
                .child(Element::new("p").text(PAGE_LEAD)),
        ),
    );

    for kind in ContentKind::ALL {
        doc.append(
            root,
            Element::new("section").id(kind.as_str()).child(
                Element::new("div")
                    .class("container")
                    .child(Element::new("h2").text(kind.heading()))
                    .child(Element::new("div").id(kind.container_id())),
            ),
        );
    }
    doc
}
