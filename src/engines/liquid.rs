//! Liquid adapter

use std::fs;
use std::path::Path;

use liquid::{Parser, ParserBuilder, Template};

use super::{PageContext, RenderEngine, HEADER};
use crate::dataset::UserRecord;
use crate::error::Error;

const TEMPLATE: &str = "liquid.html";

pub struct LiquidEngine {
    template: Template,
}

impl std::fmt::Debug for LiquidEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidEngine").finish_non_exhaustive()
    }
}

impl LiquidEngine {
    pub fn new(templates_dir: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(templates_dir.join(TEMPLATE))?;
        let parser: Parser = ParserBuilder::with_stdlib().build()?;
        let template = parser.parse(&source)?;
        Ok(Self { template })
    }
}

impl RenderEngine for LiquidEngine {
    fn label(&self) -> &'static str {
        "liquid"
    }

    fn render(&self, users: &[UserRecord]) -> Result<String, Error> {
        let page = PageContext {
            title: "Liquid template example",
            header: HEADER,
            users,
        };
        let globals = liquid::to_object(&page)?;
        Ok(self.template.render(&globals)?)
    }
}
