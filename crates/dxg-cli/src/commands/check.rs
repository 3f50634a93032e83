use dxg_core::{ContentKind, QuizAnswerPolicy};
use dxg_fetch::{ContentSource, fetch_all};
use dxg_page::{AnimatorSettings, VisibilityAnimator, landing_document};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct KindStatus {
    kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnimationStatus {
    selector: String,
    threshold: f64,
    marker_class: String,
    observed: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    kinds: Vec<KindStatus>,
    failed: usize,
    animation: AnimationStatus,
}

/// Handle `dxg check`. Failing kinds are reported, not returned as errors.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = build_report(
        &ctx.source,
        ctx.config.quiz.answer_policy,
        &ctx.animator_settings()?,
    )
    .await;
    output(&report, flags.format)
}

async fn build_report<S: ContentSource>(
    source: &S,
    policy: QuizAnswerPolicy,
    animation: &AnimatorSettings,
) -> CheckReport {
    let content = fetch_all(source, policy).await;
    let kinds: Vec<KindStatus> = content
        .summary()
        .into_iter()
        .map(|(kind, outcome)| match outcome {
            Ok(count) => KindStatus {
                kind,
                records: Some(count),
                error: None,
            },
            Err(error) => KindStatus {
                kind,
                records: None,
                error: Some(error),
            },
        })
        .collect();
    let failed = kinds.iter().filter(|status| status.error.is_some()).count();

    let page = landing_document();
    let animator = VisibilityAnimator::init(&page, animation);

    CheckReport {
        kinds,
        failed,
        animation: AnimationStatus {
            selector: animation.selector.to_string(),
            threshold: animation.threshold,
            marker_class: animation.marker_class.clone(),
            observed: animator.targets().len(),
        },
    }
}
