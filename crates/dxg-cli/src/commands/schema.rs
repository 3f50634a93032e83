use dxg_core::{CaseStudy, ChecklistItem, ContentKind, QuizQuestion, Step, ToolTech};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::KindArgs;
use crate::output::output;

/// Handle `dxg schema`.
pub fn handle(args: &KindArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&record_schema(args.kind)?, flags.format)
}

/// JSON Schema of one record in `kind`'s document.
fn record_schema(kind: ContentKind) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        ContentKind::Steps => schema_for!(Step),
        ContentKind::ToolsTech => schema_for!(ToolTech),
        ContentKind::CaseStudies => schema_for!(CaseStudy),
        ContentKind::Quiz => schema_for!(QuizQuestion),
        ContentKind::Checklist => schema_for!(ChecklistItem),
    };
    Ok(serde_json::to_value(schema)?)
}
