use dxg_core::QuizQuestion;

use super::append_blocks;
use crate::dom::{Document, Element, NodeId};

/// Label of the per-question answer-check button.
pub const CHECK_BUTTON_LABEL: &str = "回答する";

/// Radio group name for question `index`. Exactly one option per group can
/// be checked.
#[must_use]
pub fn radio_group(index: usize) -> String {
    format!("q{index}")
}

/// Id of the element that receives the verdict for question `index`.
#[must_use]
pub fn result_slot_id(index: usize) -> String {
    format!("result-{index}")
}

/// Render one block per question: numbered heading, question text, a radio
/// per option, a check button bound to the question and its answer index,
/// and an empty result slot.
pub fn render_quiz(
    doc: &mut Document,
    container: Option<NodeId>,
    questions: &[QuizQuestion],
) -> usize {
    let blocks = questions.iter().enumerate().map(|(index, question)| {
        let group = radio_group(index);
        let options = question.options.iter().enumerate().map(|(i, option)| {
            Element::new("label")
                .child(
                    Element::new("input")
                        .attr("type", "radio")
                        .attr("name", group.as_str())
                        .attr("value", i.to_string()),
                )
                .text(format!(" {option}"))
        });

        Element::new("div")
            .class("quiz-question")
            .child(Element::new("h3").text(format!("問題 {}", index + 1)))
            .child(Element::new("p").text(question.question.as_str()))
            .child(Element::new("div").class("options").children(options))
            .child(
                Element::new("button")
                    .class("check-answer")
                    .attr("type", "button")
                    .attr("data-question", index.to_string())
                    .attr("data-answer", question.correct_answer.to_string())
                    .text(CHECK_BUTTON_LABEL),
            )
            .child(Element::new("p").class("result").id(result_slot_id(index)))
    });
    append_blocks(doc, container, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_plus_two() -> QuizQuestion {
        QuizQuestion {
            question: "2+2?".to_string(),
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            correct_answer: 1,
        }
    }

    #[test]
    fn renders_radio_per_option_in_question_group() {
        let mut doc = Document::new();
        let root = doc.root();
        assert_eq!(render_quiz(&mut doc, Some(root), &[two_plus_two()]), 1);

        let values: Vec<&str> = doc
            .descendants(root)
            .into_iter()
            .filter(|id| doc.attribute(*id, "name") == Some("q0"))
            .filter_map(|id| doc.attribute(id, "value"))
            .collect();
        assert_eq!(values, vec!["0", "1", "2"]);
    }

    #[test]
    fn button_is_bound_to_question_and_answer() {
        let mut doc = Document::new();
        let root = doc.root();
        let questions = vec![two_plus_two(), two_plus_two()];
        render_quiz(&mut doc, Some(root), &questions);

        let buttons: Vec<NodeId> = doc
            .descendants(root)
            .into_iter()
            .filter(|id| doc.has_class(*id, "check-answer"))
            .collect();
        assert_eq!(buttons.len(), 2);
        assert_eq!(doc.attribute(buttons[1], "data-question"), Some("1"));
        assert_eq!(doc.attribute(buttons[1], "data-answer"), Some("1"));
        assert_eq!(doc.text_content(buttons[1]), CHECK_BUTTON_LABEL);
    }

    #[test]
    fn result_slots_start_empty() {
        let mut doc = Document::new();
        let root = doc.root();
        render_quiz(&mut doc, Some(root), &[two_plus_two()]);

        let slot = doc.get_element_by_id(&result_slot_id(0)).unwrap();
        assert!(doc.has_class(slot, "result"));
        assert_eq!(doc.text_content(slot), "");
        assert!(doc.checked_radio(&radio_group(0)).is_none());
    }

    #[test]
    fn heading_is_numbered_from_one() {
        let mut doc = Document::new();
        let root = doc.root();
        render_quiz(&mut doc, Some(root), &[two_plus_two()]);
        let block = doc.children(root)[0];
        let heading = doc.element_children(block).next().unwrap();
        assert_eq!(doc.text_content(heading), "問題 1");
    }
}
