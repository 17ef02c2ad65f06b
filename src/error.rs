//! Error types for the benchmark harness

use thiserror::Error;

/// Errors surfaced by template loading and rendering.
///
/// Engine diagnostics pass through untranslated; a failing render aborts
/// the whole run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("template read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tera(#[from] tera::Error),

    #[error(transparent)]
    Liquid(#[from] liquid::Error),

    #[error(transparent)]
    HandlebarsTemplate(#[from] handlebars::TemplateError),

    #[error(transparent)]
    HandlebarsRender(#[from] handlebars::RenderError),

    #[error(transparent)]
    MiniJinja(#[from] minijinja::Error),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),
}
