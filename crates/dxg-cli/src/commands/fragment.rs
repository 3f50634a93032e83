use anyhow::bail;
use dxg_core::ContentKind;
use dxg_fetch::ContentSource;
use dxg_page::{LoadOptions, LoadOutcome, landing_document, load_kind};
use serde::Serialize;

use crate::cli::root_commands::KindArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Fragment {
    kind: ContentKind,
    container: &'static str,
    blocks: usize,
    html: String,
}

/// Handle `dxg fragment`. Raw output prints the markup alone.
pub async fn handle(args: &KindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fragment = render_fragment(&ctx.source, args.kind, ctx.load_options()).await?;
    match flags.format {
        OutputFormat::Raw => {
            println!("{}", fragment.html);
            Ok(())
        }
        OutputFormat::Json => output(&fragment, flags.format),
    }
}

async fn render_fragment<S: ContentSource>(
    source: &S,
    kind: ContentKind,
    options: LoadOptions,
) -> anyhow::Result<Fragment> {
    let mut doc = landing_document();
    let blocks = match load_kind(source, &mut doc, kind, options).await {
        LoadOutcome::Rendered { count } => count,
        LoadOutcome::MissingContainer => bail!("landing page has no container for {kind}"),
        LoadOutcome::Failed { reason } => bail!("failed to load {}: {reason}", kind.label()),
    };
    let html = doc
        .get_element_by_id(kind.container_id())
        .map(|container| doc.inner_html(container))
        .unwrap_or_default();

    Ok(Fragment {
        kind,
        container: kind.container_id(),
        blocks,
        html,
    })
}
