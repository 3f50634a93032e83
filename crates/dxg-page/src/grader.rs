//! Quiz answer checking.
//!
//! Grading is stateless and per question: each check reads the question's
//! radio group, writes a verdict into that question's result slot, and
//! touches nothing else. Re-checking after changing the selection overwrites
//! the previous verdict.

use serde::Serialize;

use crate::dom::{Document, NodeId};
use crate::render::{radio_group, result_slot_id};

/// Outcome of checking one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No option selected.
    Unanswered,
    Correct,
    Incorrect,
}

impl Verdict {
    /// Text written into the result slot.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unanswered => "回答を選択してください。",
            Self::Correct => "正解です！",
            Self::Incorrect => "不正解です。もう一度試してください。",
        }
    }

    /// Colour cue applied to the result slot.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unanswered => "orange",
            Self::Correct => "green",
            Self::Incorrect => "red",
        }
    }
}

/// Grade a selected option value against the correct answer index.
///
/// Values that do not parse as an index never match.
#[must_use]
pub fn grade(selected: Option<&str>, correct_answer: usize) -> Verdict {
    match selected {
        None => Verdict::Unanswered,
        Some(value) if value.trim().parse::<usize>().ok() == Some(correct_answer) => {
            Verdict::Correct
        }
        Some(_) => Verdict::Incorrect,
    }
}

/// Check question `question` against answer index `answer` and write the
/// verdict into its result slot.
///
/// Returns `None` without grading when the page has no result slot for the
/// question.
pub fn check_answer(doc: &mut Document, question: usize, answer: usize) -> Option<Verdict> {
    let slot = doc.get_element_by_id(&result_slot_id(question))?;
    let selected = doc
        .checked_radio(&radio_group(question))
        .and_then(|radio| doc.attribute(radio, "value"));
    let verdict = grade(selected, answer);

    doc.set_text_content(slot, verdict.message());
    doc.set_style(slot, "color", verdict.color());
    tracing::debug!(question, ?verdict, "graded quiz answer");
    Some(verdict)
}

/// Handle a click on a rendered check button.
///
/// Returns `None` if `button` carries no question/answer binding.
pub fn click_check_button(doc: &mut Document, button: NodeId) -> Option<Verdict> {
    let question = doc.attribute(button, "data-question")?.parse().ok()?;
    let correct_answer = doc.attribute(button, "data-answer")?.parse().ok()?;
    check_answer(doc, question, correct_answer)
}

/// The check button rendered for question `question`.
#[must_use]
pub fn check_button(doc: &Document, question: usize) -> Option<NodeId> {
    let index = question.to_string();
    doc.find(|d, id| {
        d.has_class(id, "check-answer") && d.attribute(id, "data-question") == Some(index.as_str())
    })
}

/// Select option `option` of question `question`, as a user clicking the
/// radio would. Returns `false` if no such option exists.
pub fn select_option(doc: &mut Document, question: usize, option: usize) -> bool {
    let group = radio_group(question);
    let value = option.to_string();
    let radio = doc.find(|d, id| {
        d.tag(id) == Some("input")
            && d.attribute(id, "type") == Some("radio")
            && d.attribute(id, "name") == Some(group.as_str())
            && d.attribute(id, "value") == Some(value.as_str())
    });
    radio.is_some_and(|radio| doc.check_radio(radio))
}
