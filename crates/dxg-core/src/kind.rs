//! The five content kinds the landing page loads.
//!
//! Each kind owns exactly one data document and one container in the host
//! page. The mapping is fixed:
//!
//! ```text
//! steps         data/detailed-steps.json  → #detailed-steps-container
//! tools_tech    data/tools-tech.json      → #tools-tech-container
//! case_studies  data/case-studies.json    → #case-studies-container
//! quiz          data/quiz.json            → #quiz-container
//! checklist     data/checklist.json       → #checklist-container
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Steps,
    ToolsTech,
    CaseStudies,
    Quiz,
    Checklist,
}

impl ContentKind {
    /// All kinds, in page order.
    pub const ALL: [Self; 5] = [
        Self::Steps,
        Self::ToolsTech,
        Self::CaseStudies,
        Self::Quiz,
        Self::Checklist,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::ToolsTech => "tools_tech",
            Self::CaseStudies => "case_studies",
            Self::Quiz => "quiz",
            Self::Checklist => "checklist",
        }
    }

    /// Path of the JSON document, relative to the page.
    #[must_use]
    pub const fn data_path(self) -> &'static str {
        match self {
            Self::Steps => "data/detailed-steps.json",
            Self::ToolsTech => "data/tools-tech.json",
            Self::CaseStudies => "data/case-studies.json",
            Self::Quiz => "data/quiz.json",
            Self::Checklist => "data/checklist.json",
        }
    }

    /// Id of the container element this kind renders into.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Steps => "detailed-steps-container",
            Self::ToolsTech => "tools-tech-container",
            Self::CaseStudies => "case-studies-container",
            Self::Quiz => "quiz-container",
            Self::Checklist => "checklist-container",
        }
    }

    /// Human-readable label used in log lines and diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steps => "detailed steps",
            Self::ToolsTech => "tools and technologies",
            Self::CaseStudies => "case studies",
            Self::Quiz => "quiz",
            Self::Checklist => "checklist",
        }
    }

    /// Section heading shown above the container on the landing page.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Steps => "DX推進のステップ",
            Self::ToolsTech => "ツールと技術",
            Self::CaseStudies => "導入事例",
            Self::Quiz => "理解度クイズ",
            Self::Checklist => "DX準備チェックリスト",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_and_kebab_names() {
        let tools: ContentKind = "tools_tech".parse().unwrap();
        let cases: ContentKind = "case-studies".parse().unwrap();
        let quiz: ContentKind = " Quiz ".parse().unwrap();
        assert_eq!(tools, ContentKind::ToolsTech);
        assert_eq!(cases, ContentKind::CaseStudies);
        assert_eq!(quiz, ContentKind::Quiz);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "glossary".parse::<ContentKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown content kind: glossary");
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.to_string().parse::<ContentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn containers_and_paths_are_distinct() {
        let mut containers: Vec<_> = ContentKind::ALL
            .into_iter()
            .map(ContentKind::container_id)
            .collect();
        let mut paths: Vec<_> = ContentKind::ALL
            .into_iter()
            .map(ContentKind::data_path)
            .collect();
        containers.sort_unstable();
        containers.dedup();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(containers.len(), 5);
        assert_eq!(paths.len(), 5);
        for path in &paths {
            assert!(path.starts_with("data/") && path.ends_with(".json"));
        }
    }
}
