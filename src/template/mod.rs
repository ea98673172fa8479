use crate::template::error::TemplateError;
use crate::template::error::TemplateError::{
    CantReadTemplate, MalformedTemplate, RenderingFailed,
};
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

pub mod error;

type Result<T, E = TemplateError> = std::result::Result<T, E>;

/// Registered as HTML so that substituted values get escaped.
const TEMPLATE_NAME: &str = "body.html";
/// The only field available to templates: `{{Name}}`.
pub const NAME_FIELD: &str = "Name";

/// A compiled email body template, loaded once and rendered for each recipient.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CantReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(&content)
    }

    pub fn from_raw(content: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, content)
            .map_err(MalformedTemplate)?;
        Ok(Self { tera })
    }

    pub fn render(&self, display_name: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert(NAME_FIELD, display_name);
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|source| RenderingFailed {
                display_name: display_name.to_owned(),
                source,
            })
    }
}
