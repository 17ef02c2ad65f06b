//! Handlebars adapter

use std::fs;
use std::path::Path;

use handlebars::Handlebars;

use super::{PageContext, RenderEngine, HEADER};
use crate::dataset::UserRecord;
use crate::error::Error;

const TEMPLATE: &str = "handlebars.hbs";

#[derive(Debug)]
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new(templates_dir: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(templates_dir.join(TEMPLATE))?;
        let mut registry = Handlebars::new();
        registry.register_template_string(TEMPLATE, source)?;
        Ok(Self { registry })
    }
}

impl RenderEngine for HandlebarsEngine {
    fn label(&self) -> &'static str {
        "handlebars"
    }

    fn render(&self, users: &[UserRecord]) -> Result<String, Error> {
        let page = PageContext {
            title: "Handlebars template example",
            header: HEADER,
            users,
        };
        Ok(self.registry.render(TEMPLATE, &page)?)
    }
}
