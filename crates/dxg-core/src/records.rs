//! Content records decoded from the landing page's JSON documents.
//!
//! Every field is required. A document with a missing or mistyped field
//! fails to decode as a whole instead of leaking empty values into markup.
//! Wire names are camelCase (`subSteps`, `correctAnswer`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of the DX roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub title: String,
    pub description: String,
    pub sub_steps: Vec<String>,
}

/// A tool or technology, grouped on the page by `category`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ToolTech {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudy {
    pub company: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
}

/// A multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuizQuestion {
    /// Whether `correct_answer` points at an existing option.
    #[must_use]
    pub fn answer_in_range(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
    pub description: String,
}

/// Tools sharing one category, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a ToolTech>,
}

/// Group tools by category.
///
/// Categories appear in order of first occurrence; items keep their relative
/// input order within each category.
#[must_use]
pub fn group_by_category(tools: &[ToolTech]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|g| g.category == tool.category) {
            Some(group) => group.items.push(tool),
            None => groups.push(CategoryGroup {
                category: &tool.category,
                items: vec![tool],
            }),
        }
    }
    groups
}
