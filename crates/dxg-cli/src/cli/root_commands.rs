use clap::{Args, Subcommand};
use dxg_core::ContentKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch and validate every content document.
    Check,
    /// Load the quiz, optionally pick an option, and check the answer.
    Grade(GradeArgs),
    /// Render one content kind and print its container markup.
    Fragment(KindArgs),
    /// Print the JSON Schema of a content kind's records.
    Schema(KindArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GradeArgs {
    /// Question number, as shown on the page (starting at 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub question: u32,

    /// Option number to select before checking (starting at 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub select: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct KindArgs {
    /// steps, tools-tech, case-studies, quiz or checklist
    pub kind: ContentKind,
}
