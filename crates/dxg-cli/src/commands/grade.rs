use anyhow::{Context, bail};
use dxg_core::ContentKind;
use dxg_fetch::ContentSource;
use dxg_page::{
    LoadOptions, LoadOutcome, Verdict, check_button, click_check_button, landing_document,
    load_kind, select_option,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GradeArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GradeResponse {
    question: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<u32>,
    verdict: Verdict,
    message: &'static str,
    color: &'static str,
}

/// Handle `dxg grade`.
pub async fn handle(args: &GradeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = grade_question(&ctx.source, ctx.load_options(), args).await?;
    output(&response, flags.format)
}

async fn grade_question<S: ContentSource>(
    source: &S,
    options: LoadOptions,
    args: &GradeArgs,
) -> anyhow::Result<GradeResponse> {
    let mut doc = landing_document();
    let questions = match load_kind(source, &mut doc, ContentKind::Quiz, options).await {
        LoadOutcome::Rendered { count } => count,
        LoadOutcome::MissingContainer => bail!("landing page has no quiz container"),
        LoadOutcome::Failed { reason } => bail!("failed to load quiz: {reason}"),
    };

    let index = usize::try_from(args.question - 1)?;
    if index >= questions {
        bail!(
            "question {} does not exist (quiz has {questions} questions)",
            args.question
        );
    }

    if let Some(option) = args.select {
        let option_index = usize::try_from(option - 1)?;
        if !select_option(&mut doc, index, option_index) {
            bail!("question {} has no option {option}", args.question);
        }
    }

    let button = check_button(&doc, index)
        .with_context(|| format!("question {} has no check button", args.question))?;
    let verdict = click_check_button(&mut doc, button)
        .with_context(|| format!("question {} could not be graded", args.question))?;

    Ok(GradeResponse {
        question: args.question,
        selected: args.select,
        verdict,
        message: verdict.message(),
        color: verdict.color(),
    })
}
