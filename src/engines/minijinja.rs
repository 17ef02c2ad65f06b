//! MiniJinja adapter

use std::fs;
use std::path::Path;

use minijinja::Environment;

use super::{PageContext, RenderEngine, HEADER};
use crate::dataset::UserRecord;
use crate::error::Error;

const TEMPLATE: &str = "minijinja.html";

#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new(templates_dir: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(templates_dir.join(TEMPLATE))?;
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE, source)?;
        Ok(Self { env })
    }
}

impl RenderEngine for MiniJinjaEngine {
    fn label(&self) -> &'static str {
        "minijinja"
    }

    fn render(&self, users: &[UserRecord]) -> Result<String, Error> {
        let page = PageContext {
            title: "MiniJinja template example",
            header: HEADER,
            users,
        };
        let template = self.env.get_template(TEMPLATE)?;
        Ok(template.render(&page)?)
    }
}
