//! # dxg-fetch
//!
//! Content fetching for dxguide.
//!
//! Retrieves the landing page's JSON documents through a [`ContentSource`]
//! and decodes them into typed records from `dxg-core`:
//! - [`HttpSource`] resolves data paths against a base URL
//! - [`DirSource`] reads data paths beneath a local site root
//!
//! A failing document never fails its siblings: [`fetch_all`] fetches every
//! kind concurrently and reports each outcome separately.

mod dir;
mod error;
mod http;

pub use dir::DirSource;
pub use error::FetchError;
pub use http::{HttpSource, check_response};

use std::future::Future;

use dxg_core::{
    CaseStudy, ChecklistItem, ContentKind, QuizAnswerPolicy, QuizQuestion, Step, ToolTech,
};
use serde::de::DeserializeOwned;

// ── Source ─────────────────────────────────────────────────────────

/// Something that can retrieve a document body by page-relative path.
pub trait ContentSource {
    /// Fetch the raw body of the document at `path`.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>>;

    /// Human-readable location of `path`, for log lines.
    fn describe(&self, path: &str) -> String;
}

/// Either source, chosen at runtime from configuration.
pub enum Source {
    Http(HttpSource),
    Dir(DirSource),
}

impl ContentSource for Source {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        match self {
            Self::Http(source) => source.fetch(path).await,
            Self::Dir(source) => source.fetch(path).await,
        }
    }

    fn describe(&self, path: &str) -> String {
        match self {
            Self::Http(source) => source.describe(path),
            Self::Dir(source) => source.describe(path),
        }
    }
}

// ── Decoding ───────────────────────────────────────────────────────

/// Fetch the document for `kind` and decode it as an array of `T`.
///
/// # Errors
///
/// Returns [`FetchError`] if retrieval fails or the body is not a JSON array
/// of well-formed `T` records.
pub async fn fetch_records<T, S>(source: &S, kind: ContentKind) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
    S: ContentSource,
{
    let path = kind.data_path();
    let body = source.fetch(path).await?;
    let records: Vec<T> = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
        path: source.describe(path),
        source: e,
    })?;
    tracing::debug!(kind = %kind, count = records.len(), "decoded content");
    Ok(records)
}

/// Fetch and decode the quiz, then apply the answer-index policy.
///
/// # Errors
///
/// Same as [`fetch_records`], plus [`FetchError::Validation`] when `policy`
/// rejects an out-of-range answer index.
pub async fn fetch_quiz<S: ContentSource>(
    source: &S,
    policy: QuizAnswerPolicy,
) -> Result<Vec<QuizQuestion>, FetchError> {
    let questions = fetch_records(source, ContentKind::Quiz).await?;
    policy.validate(&questions)?;
    Ok(questions)
}

// ── Bulk fetch ─────────────────────────────────────────────────────

/// Per-kind outcome of fetching every document.
#[derive(Debug)]
pub struct FetchedContent {
    pub steps: Result<Vec<Step>, FetchError>,
    pub tools_tech: Result<Vec<ToolTech>, FetchError>,
    pub case_studies: Result<Vec<CaseStudy>, FetchError>,
    pub quiz: Result<Vec<QuizQuestion>, FetchError>,
    pub checklist: Result<Vec<ChecklistItem>, FetchError>,
}

impl FetchedContent {
    /// Record count or error message per kind, in page order.
    #[must_use]
    pub fn summary(&self) -> Vec<(ContentKind, Result<usize, String>)> {
        fn count<T>(result: &Result<Vec<T>, FetchError>) -> Result<usize, String> {
            result.as_ref().map(Vec::len).map_err(ToString::to_string)
        }

        vec![
            (ContentKind::Steps, count(&self.steps)),
            (ContentKind::ToolsTech, count(&self.tools_tech)),
            (ContentKind::CaseStudies, count(&self.case_studies)),
            (ContentKind::Quiz, count(&self.quiz)),
            (ContentKind::Checklist, count(&self.checklist)),
        ]
    }
}

/// Fetch every document concurrently.
///
/// Individual failures are logged and kept in their slot; one failing
/// document does not affect the others.
pub async fn fetch_all<S: ContentSource>(source: &S, policy: QuizAnswerPolicy) -> FetchedContent {
    let (steps, tools_tech, case_studies, quiz, checklist) = tokio::join!(
        fetch_records(source, ContentKind::Steps),
        fetch_records(source, ContentKind::ToolsTech),
        fetch_records(source, ContentKind::CaseStudies),
        fetch_quiz(source, policy),
        fetch_records(source, ContentKind::Checklist),
    );

    let content = FetchedContent {
        steps,
        tools_tech,
        case_studies,
        quiz,
        checklist,
    };
    for (kind, outcome) in content.summary() {
        if let Err(error) = outcome {
            tracing::warn!(kind = %kind, %error, "failed to load {}", kind.label());
        }
    }
    content
}
