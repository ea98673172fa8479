use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Couldn't read the template [path: {path}]")]
    CantReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The template is malformed")]
    MalformedTemplate(#[source] tera::Error),
    #[error("Couldn't render the template for {display_name}")]
    RenderingFailed {
        display_name: String,
        #[source]
        source: tera::Error,
    },
}
