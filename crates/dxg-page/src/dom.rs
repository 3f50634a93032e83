//! In-memory document tree.
//!
//! Stands in for the browser DOM: renderers append element trees to
//! containers, the grader reads checked radios and writes result slots, the
//! animator toggles classes. Nodes live in an arena and are addressed by
//! [`NodeId`]; removed nodes stay allocated but are no longer reachable from
//! the root.
//!
//! Text is stored verbatim and escaped only in [`Document::to_html`], so data
//! can never be interpreted as markup.

use dxg_core::ChildSelector;

use crate::escape::{escape_attr, escape_text};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

// ── Builder ────────────────────────────────────────────────────────

/// Owned element tree, built by renderers and inserted with
/// [`Document::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }
}

// ── Arena ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: Vec<(String, String)>,
        styles: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only an empty `body` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Element {
                    tag: "body".to_string(),
                    classes: Vec::new(),
                    attributes: Vec::new(),
                    styles: Vec::new(),
                },
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Insert an element tree as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let Element {
            tag,
            classes,
            attributes,
            children,
        } = element;
        let id = self.push(
            NodeKind::Element {
                tag,
                classes,
                attributes,
                styles: Vec::new(),
            },
            parent,
        );
        for child in children {
            match child {
                Node::Element(element) => {
                    self.append(id, element);
                }
                Node::Text(text) => {
                    self.append_text(id, text);
                }
            }
        }
        id
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()), parent)
    }

    /// Replace all children of `id` with a single text node.
    ///
    /// A sole text child is rewritten in place rather than replaced.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        if let [only] = self.nodes[id.0].children[..] {
            if let NodeKind::Text(existing) = &mut self.nodes[only.0].kind {
                *existing = text.into();
                return;
            }
        }
        for child in std::mem::take(&mut self.nodes[id.0].children) {
            self.nodes[child.0].parent = None;
        }
        self.append_text(id, text);
    }

    /// Concatenated text of `id` and all its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &self.nodes[id.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    // ── Navigation ─────────────────────────────────────────────────

    /// Tag name, or `None` for a text node.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// All child nodes, text included.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Child elements only.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.tag(*child).is_some())
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// First descendant of the root satisfying `predicate`, in document order.
    pub fn find(&self, predicate: impl Fn(&Self, NodeId) -> bool) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|id| predicate(self, *id))
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(|doc, node| doc.attribute(node, "id") == Some(id))
    }

    /// Elements matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &ChildSelector) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| self.tag(*id).is_some())
            .filter(|id| selector.matches_path(self.tag_path(*id)))
            .collect()
    }

    /// Tag of `id` followed by its ancestors' tags, nearest first.
    fn tag_path(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        let ancestors = std::iter::successors(Some(id), |node| self.parent(*node));
        ancestors.filter_map(|node| self.tag(node))
    }

    // ── Attributes ─────────────────────────────────────────────────

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    #[must_use]
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[id.0].kind {
            let value = value.into();
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value,
                None => attributes.push((name.to_string(), value)),
            }
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[id.0].kind {
            attributes.retain(|(n, _)| n != name);
        }
    }

    // ── Classes and styles ─────────────────────────────────────────

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    #[must_use]
    pub fn classes(&self, id: NodeId) -> &[String] {
        match &self.nodes[id.0].kind {
            NodeKind::Element { classes, .. } => classes,
            NodeKind::Text(_) => &[],
        }
    }

    /// Add `class` to an element. Returns `false` if it was already present
    /// or `id` is a text node.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element { classes, .. } if !classes.iter().any(|c| c == class) => {
                classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { styles, .. } => styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if let NodeKind::Element { styles, .. } = &mut self.nodes[id.0].kind {
            let value = value.into();
            match styles.iter_mut().find(|(p, _)| p == property) {
                Some(slot) => slot.1 = value,
                None => styles.push((property.to_string(), value)),
            }
        }
    }

    // ── Form controls ──────────────────────────────────────────────

    /// The checked radio input in group `name`, if any.
    #[must_use]
    pub fn checked_radio(&self, name: &str) -> Option<NodeId> {
        self.find(|doc, id| {
            doc.is_radio(id)
                && doc.attribute(id, "name") == Some(name)
                && doc.has_attribute(id, "checked")
        })
    }

    /// Check a radio input, unchecking every other radio in its group.
    /// Returns `false` if `id` is not a radio input.
    pub fn check_radio(&mut self, id: NodeId) -> bool {
        if !self.is_radio(id) {
            return false;
        }
        let group = self.attribute(id, "name").map(str::to_string);
        let siblings: Vec<NodeId> = self
            .descendants(self.root())
            .into_iter()
            .filter(|other| {
                self.is_radio(*other) && self.attribute(*other, "name") == group.as_deref()
            })
            .collect();
        for other in siblings {
            self.remove_attribute(other, "checked");
        }
        self.set_attribute(id, "checked", "");
        true
    }

    fn is_radio(&self, id: NodeId) -> bool {
        self.tag(id) == Some("input") && self.attribute(id, "type") == Some("radio")
    }

    // ── Serialization ──────────────────────────────────────────────

    /// Serialize `id` and its subtree as HTML, escaping all text and
    /// attribute values.
    #[must_use]
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Serialize only the children of `id`.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_html(*child, &mut out);
        }
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Element {
                tag,
                classes,
                attributes,
                styles,
            } => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape_attr(&classes.join(" ")));
                    out.push('"');
                }
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                if !styles.is_empty() {
                    let declarations: Vec<String> =
                        styles.iter().map(|(p, v)| format!("{p}: {v}")).collect();
                    out.push_str(" style=\"");
                    out.push_str(&escape_attr(&declarations.join("; ")));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in &node.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
