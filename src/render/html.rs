use crate::config::DEFAULT_DOWNLOAD_FILE_NAME;
use crate::error::RenderError;
use crate::summary::WorkflowSummary;
use minijinja::{Environment, context};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Renders the showcase page from a [`WorkflowSummary`].
///
/// The template is registered under an `.html` name so every interpolated value is
/// HTML-escaped.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    page_title: String,
    download_href: String,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new("n8n Workflow", DEFAULT_DOWNLOAD_FILE_NAME)
    }
}

impl PageRenderer {
    pub fn new(page_title: &str, download_href: &str) -> Self {
        Self {
            page_title: page_title.to_string(),
            download_href: download_href.to_string(),
        }
    }

    pub fn render(&self, summary: &WorkflowSummary) -> Result<String, RenderError> {
        let template_error = |source| RenderError::Template {
            name: PAGE_TEMPLATE_NAME.to_string(),
            source,
        };

        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(template_error)?;
        let template = env.get_template(PAGE_TEMPLATE_NAME).map_err(template_error)?;

        template
            .render(context! {
                page_title => &self.page_title,
                download_href => &self.download_href,
                summary => summary,
            })
            .map_err(template_error)
    }
}
