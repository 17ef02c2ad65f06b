//! Tera adapter

use std::fs;
use std::path::Path;

use tera::Tera;

use super::{PageContext, RenderEngine, HEADER};
use crate::dataset::UserRecord;
use crate::error::Error;

const TEMPLATE: &str = "tera.html";

#[derive(Debug)]
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    pub fn new(templates_dir: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(templates_dir.join(TEMPLATE))?;
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE, &source)?;
        Ok(Self { tera })
    }
}

impl RenderEngine for TeraEngine {
    fn label(&self) -> &'static str {
        "tera"
    }

    fn render(&self, users: &[UserRecord]) -> Result<String, Error> {
        let page = PageContext {
            title: "Tera template example",
            header: HEADER,
            users,
        };
        let context = tera::Context::from_serialize(&page)?;
        Ok(self.tera.render(TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn templates_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    #[test]
    fn test_renders_users_table() {
        let engine = TeraEngine::new(&templates_dir()).unwrap();
        let users = vec![
            UserRecord {
                name: "User_0".to_string(),
                email: "user_0@gmail.com".to_string(),
                is_admin: true,
            },
            UserRecord {
                name: "User_1".to_string(),
                email: "user_1@gmail.com".to_string(),
                is_admin: false,
            },
        ];

        let html = engine.render(&users).unwrap();
        assert!(html.contains("Tera template example"));
        assert!(html.contains(HEADER));
        assert!(html.contains("<td>User_0</td>"));
        assert!(html.contains("<td>user_1@gmail.com</td>"));
        assert!(html.contains("<td>+</td>"));
        assert!(html.contains("<td>-</td>"));
    }
}
