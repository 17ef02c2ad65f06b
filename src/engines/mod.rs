//! Template engine adapters
//!
//! One adapter per library, behind a common trait. Each adapter compiles its
//! template file once at construction and holds the resulting read-only
//! environment handle; rendering is a direct delegation to the library.

mod handlebars;
mod liquid;
mod minijinja;
mod tera;

pub use self::handlebars::HandlebarsEngine;
pub use self::liquid::LiquidEngine;
pub use self::minijinja::MiniJinjaEngine;
pub use self::tera::TeraEngine;

use crate::config::Config;
use crate::dataset::UserRecord;
use crate::error::Error;
use serde::Serialize;

/// Header shared by every engine's page.
pub const HEADER: &str = "Users list";

/// Values made available to a template during rendering.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub header: &'a str,
    pub users: &'a [UserRecord],
}

/// A template library plugged into the harness.
pub trait RenderEngine: std::fmt::Debug {
    /// Short identifying label used in reports.
    fn label(&self) -> &'static str;

    /// Render the users page. Library failures pass through untranslated.
    fn render(&self, users: &[UserRecord]) -> Result<String, Error>;
}

/// Instantiate the enabled engines in configured order.
pub fn build(config: &Config) -> Result<Vec<Box<dyn RenderEngine>>, Error> {
    let dir = &config.templates.dir;
    let mut engines: Vec<Box<dyn RenderEngine>> = Vec::with_capacity(config.engines.enabled.len());

    for name in &config.engines.enabled {
        let engine: Box<dyn RenderEngine> = match name.as_str() {
            "tera" => Box::new(TeraEngine::new(dir)?),
            "liquid" => Box::new(LiquidEngine::new(dir)?),
            "handlebars" => Box::new(HandlebarsEngine::new(dir)?),
            "minijinja" => Box::new(MiniJinjaEngine::new(dir)?),
            other => return Err(Error::UnknownEngine(other.to_string())),
        };
        engines.push(engine);
    }

    Ok(engines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.templates.dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
        config
    }

    #[test]
    fn test_build_default_engines() {
        let engines = build(&test_config()).unwrap();
        let labels: Vec<_> = engines.iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["tera", "liquid", "handlebars", "minijinja"]);
    }

    #[test]
    fn test_build_respects_enabled_list() {
        let mut config = test_config();
        config.engines.enabled = vec!["minijinja".to_string(), "tera".to_string()];
        let engines = build(&config).unwrap();
        let labels: Vec<_> = engines.iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["minijinja", "tera"]);
    }

    #[test]
    fn test_unknown_engine_is_an_error() {
        let mut config = test_config();
        config.engines.enabled = vec!["mustache".to_string()];
        let err = build(&config).unwrap_err();
        assert!(matches!(err, Error::UnknownEngine(name) if name == "mustache"));
    }

    #[test]
    fn test_missing_templates_dir_is_an_error() {
        let mut config = test_config();
        config.templates.dir = PathBuf::from("/nonexistent/templates");
        assert!(build(&config).is_err());
    }
}
