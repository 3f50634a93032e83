//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use dxg_config::{ConfigError, DxConfig};
use dxg_core::QuizAnswerPolicy;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
base_url = "https://dx.example.com/guide/"
user_agent = "dx-test/1.0"
timeout_secs = 15

[quiz]
answer_policy = "strict"

[animation]
selector = "main > section > *"
threshold = 0.25
marker_class = "is-visible"
"#,
        )?;

        let config: DxConfig = Figment::from(Serialized::defaults(DxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.base_url, "https://dx.example.com/guide/");
        assert_eq!(config.source.user_agent, "dx-test/1.0");
        assert_eq!(config.source.timeout_secs, 15);
        assert!(config.source.is_remote());
        assert_eq!(config.quiz.answer_policy, QuizAnswerPolicy::Strict);
        assert_eq!(config.animation.selector, "main > section > *");
        assert!((config.animation.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.animation.marker_class, "is-visible");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
data_dir = "site"
"#,
        )?;

        let config: DxConfig = Figment::from(Serialized::defaults(DxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.data_dir, "site");
        assert_eq!(config.source.user_agent, "dxguide/0.1");
        assert_eq!(config.quiz.answer_policy, QuizAnswerPolicy::Permissive);
        assert_eq!(config.animation.selector, "section > div > *");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[quiz]
answer_policy = "strict"
"#,
        )?;
        jail.set_env("DXGUIDE_QUIZ__ANSWER_POLICY", "permissive");
        jail.set_env("DXGUIDE_ANIMATION__THRESHOLD", "0.5");

        let config: DxConfig = Figment::from(Serialized::defaults(DxConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("DXGUIDE_").split("__"))
            .extract()?;

        assert_eq!(config.quiz.answer_policy, QuizAnswerPolicy::Permissive);
        assert!((config.animation.threshold - 0.5).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn load_reads_project_local_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".dxguide").map_err(|e| e.to_string())?;
        jail.create_file(
            ".dxguide/config.toml",
            r#"
[source]
data_dir = "public"
"#,
        )?;

        let config = DxConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.source.data_dir, "public");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_threshold_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("DXGUIDE_ANIMATION__THRESHOLD", "2.0");

        let err = DxConfig::load().unwrap_err();
        let ConfigError::InvalidValue { field, .. } = err else {
            panic!("expected invalid value");
        };
        assert_eq!(field, "animation.threshold");
        Ok(())
    });
}

#[test]
fn load_rejects_unknown_policy() {
    Jail::expect_with(|jail| {
        jail.set_env("DXGUIDE_QUIZ__ANSWER_POLICY", "lenient");

        let err = DxConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
