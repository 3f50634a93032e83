//! Page-ready orchestration: fetch every kind and render it into its
//! container.
//!
//! The five loaders run concurrently on one task. Each borrows the document
//! only once its fetch has resolved, so no borrow spans an await point and
//! the containers they write to are disjoint.

use std::cell::RefCell;
use std::future::Future;

use dxg_core::{ContentKind, QuizAnswerPolicy};
use dxg_fetch::{ContentSource, FetchError, fetch_quiz, fetch_records};
use serde::Serialize;

use crate::animator::{AnimatorSettings, VisibilityAnimator};
use crate::dom::{Document, NodeId};
use crate::render::{
    render_case_studies, render_checklist, render_quiz, render_steps, render_tools_tech,
};

/// Options that affect how documents are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub quiz_policy: QuizAnswerPolicy,
}

/// What happened to one kind during a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Records were rendered; `count` is the number of blocks appended.
    Rendered { count: usize },
    /// The document loaded but the page has no container for it.
    MissingContainer,
    /// Fetching, decoding or validating the document failed.
    Failed { reason: String },
}

impl LoadOutcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadEntry {
    pub kind: ContentKind,
    #[serde(flatten)]
    pub outcome: LoadOutcome,
}

/// Per-kind outcomes of [`load_page`], in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub entries: Vec<LoadEntry>,
}

impl LoadReport {
    #[must_use]
    pub fn outcome(&self, kind: ContentKind) -> Option<&LoadOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.outcome)
    }

    /// Total blocks rendered across every kind.
    #[must_use]
    pub fn rendered_total(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry.outcome {
                LoadOutcome::Rendered { count } => count,
                _ => 0,
            })
            .sum()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_failure())
            .count()
    }
}

type Renderer<T> = fn(&mut Document, Option<NodeId>, &[T]) -> usize;

async fn render_when_ready<T, F>(
    doc: &RefCell<&mut Document>,
    kind: ContentKind,
    fetch: F,
    render: Renderer<T>,
) -> LoadOutcome
where
    F: Future<Output = Result<Vec<T>, FetchError>>,
{
    let records = match fetch.await {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(kind = %kind, %error, "failed to load {}", kind.label());
            return LoadOutcome::Failed {
                reason: error.to_string(),
            };
        }
    };

    let mut doc = doc.borrow_mut();
    let Some(container) = doc.get_element_by_id(kind.container_id()) else {
        tracing::debug!(kind = %kind, container = kind.container_id(), "no container on page");
        return LoadOutcome::MissingContainer;
    };
    let count = render(&mut doc, Some(container), &records);
    tracing::debug!(kind = %kind, count, "rendered content");
    LoadOutcome::Rendered { count }
}

async fn load_into<S: ContentSource>(
    source: &S,
    doc: &RefCell<&mut Document>,
    kind: ContentKind,
    options: LoadOptions,
) -> LoadOutcome {
    match kind {
        ContentKind::Steps => {
            render_when_ready(doc, kind, fetch_records(source, kind), render_steps).await
        }
        ContentKind::ToolsTech => {
            render_when_ready(doc, kind, fetch_records(source, kind), render_tools_tech).await
        }
        ContentKind::CaseStudies => {
            render_when_ready(doc, kind, fetch_records(source, kind), render_case_studies).await
        }
        ContentKind::Quiz => {
            render_when_ready(
                doc,
                kind,
                fetch_quiz(source, options.quiz_policy),
                render_quiz,
            )
            .await
        }
        ContentKind::Checklist => {
            render_when_ready(doc, kind, fetch_records(source, kind), render_checklist).await
        }
    }
}

/// Load one kind into its container.
pub async fn load_kind<S: ContentSource>(
    source: &S,
    doc: &mut Document,
    kind: ContentKind,
    options: LoadOptions,
) -> LoadOutcome {
    let doc = RefCell::new(doc);
    load_into(source, &doc, kind, options).await
}

/// Load every kind concurrently. A failing kind is logged and reported
/// without affecting the rest.
pub async fn load_page<S: ContentSource>(
    source: &S,
    doc: &mut Document,
    options: LoadOptions,
) -> LoadReport {
    let doc = RefCell::new(doc);
    let (steps, tools_tech, case_studies, quiz, checklist) = tokio::join!(
        load_into(source, &doc, ContentKind::Steps, options),
        load_into(source, &doc, ContentKind::ToolsTech, options),
        load_into(source, &doc, ContentKind::CaseStudies, options),
        load_into(source, &doc, ContentKind::Quiz, options),
        load_into(source, &doc, ContentKind::Checklist, options),
    );

    let entries = ContentKind::ALL
        .into_iter()
        .zip([steps, tools_tech, case_studies, quiz, checklist])
        .map(|(kind, outcome)| LoadEntry { kind, outcome })
        .collect();
    LoadReport { entries }
}

/// Page-ready entry point: start observing the static page, then load all
/// content into it.
///
/// The animator is initialized before any content arrives, so rendered
/// blocks are not among its targets.
pub async fn on_ready<S: ContentSource>(
    source: &S,
    doc: &mut Document,
    options: LoadOptions,
    animation: &AnimatorSettings,
) -> (VisibilityAnimator, LoadReport) {
    let animator = VisibilityAnimator::init(doc, animation);
    let report = load_page(source, doc, options).await;
    (animator, report)
}
