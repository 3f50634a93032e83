use anyhow::Context;
use dxg_config::DxConfig;
use dxg_fetch::{DirSource, HttpSource, Source};
use dxg_page::{AnimatorSettings, LoadOptions};

use crate::cli::GlobalFlags;

/// Everything a command needs: the loaded configuration and the content
/// source it resolves to.
pub struct AppContext {
    pub config: DxConfig,
    pub source: Source,
}

impl AppContext {
    /// Build the context. `--source` wins over the configured source.
    pub fn init(config: DxConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let location = flags
            .source
            .clone()
            .unwrap_or_else(|| configured_location(&config));
        let source = open_source(&location, &config)?;
        tracing::debug!(%location, "resolved content source");
        Ok(Self { config, source })
    }

    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            quiz_policy: self.config.quiz.answer_policy,
        }
    }

    pub fn animator_settings(&self) -> anyhow::Result<AnimatorSettings> {
        let animation = &self.config.animation;
        Ok(AnimatorSettings {
            selector: animation.parsed_selector()?,
            threshold: animation.threshold,
            marker_class: animation.marker_class.clone(),
        })
    }
}

fn configured_location(config: &DxConfig) -> String {
    if config.source.is_remote() {
        config.source.base_url.clone()
    } else {
        config.source.data_dir.clone()
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn open_source(location: &str, config: &DxConfig) -> anyhow::Result<Source> {
    if is_url(location) {
        let source = &config.source;
        let http = HttpSource::new(location, &source.user_agent, source.timeout());
        let http = http.with_context(|| format!("invalid content source '{location}'"))?;
        Ok(Source::Http(http))
    } else {
        Ok(Source::Dir(DirSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(source: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn defaults_to_configured_data_dir() {
        let ctx = AppContext::init(DxConfig::default(), &flags(None)).unwrap();
        let Source::Dir(dir) = &ctx.source else {
            panic!("expected directory source");
        };
        assert_eq!(dir.root(), std::path::Path::new("."));
    }

    #[test]
    fn configured_base_url_selects_http() {
        let mut config = DxConfig::default();
        config.source.base_url = "https://dx.example.com/guide".to_string();
        let ctx = AppContext::init(config, &flags(None)).unwrap();
        assert!(matches!(ctx.source, Source::Http(_)));
    }

    #[test]
    fn flag_overrides_config() {
        let mut config = DxConfig::default();
        config.source.base_url = "https://dx.example.com/".to_string();
        let ctx = AppContext::init(config, &flags(Some("./site"))).unwrap();
        assert!(matches!(ctx.source, Source::Dir(_)));
    }

    #[test]
    fn load_options_follow_quiz_policy() {
        let mut config = DxConfig::default();
        config.quiz.answer_policy = dxg_core::QuizAnswerPolicy::Strict;
        let ctx = AppContext::init(config, &flags(None)).unwrap();
        assert_eq!(
            ctx.load_options().quiz_policy,
            dxg_core::QuizAnswerPolicy::Strict
        );
    }
}
