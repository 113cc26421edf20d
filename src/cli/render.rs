//! Render the breadcrumb trail of a page.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use quick_xml::escape::unescape;
use serde::Serialize;

use super::{open_store, read_page};
use crate::config::{BreadcrumbConfig, CrumbtrailConfig};
use crate::core::PageId;
use crate::directive::extract_declaration;
use crate::markup::{HtmlLinkRenderer, PlainLinkRenderer};
use crate::resolver::{ChainResolver, Dependency, RenderResult, SelfDisplay};

/// Output format of `render`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The trail as HTML, wrapped in its container element
    #[default]
    Html,
    /// Plain labels joined by the delimiter
    Text,
    /// A JSON report with trail, markup and dependencies
    Json,
}

/// Command to render a page's breadcrumb trail.
///
/// The page's own directive (including its `self` attribute) is read from the
/// page file; ancestors are read as the walk reaches them.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Page to render, e.g. `Help:Getting_Started`
    page: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    page: &'a PageId,
    trail: &'a str,
    markup: &'a str,
    dependencies: &'a [Dependency],
    termination: String,
}

impl RenderCommand {
    /// Create a render command.
    #[must_use]
    pub fn new(page: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            page: page.into(),
            format,
        }
    }

    /// Render and print the trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be read or the report cannot be serialized.
    pub fn execute(self, settings: &CrumbtrailConfig) -> Result<()> {
        let output = self.run(settings)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    /// Render the trail into the text `execute` prints.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is missing or invalid, or the JSON report fails.
    pub fn run(&self, settings: &CrumbtrailConfig) -> Result<String> {
        let store = open_store(settings);
        let (page, revision) =
            read_page(&store, &self.page).with_context(|| format!("Cannot render breadcrumb for '{}'", self.page))?;

        let declaration = extract_declaration(&revision.text).unwrap_or_default();
        let self_display = SelfDisplay::from_attribute(declaration.self_label.as_deref());

        match self.format {
            OutputFormat::Html => {
                let links = HtmlLinkRenderer::from_config(&settings.links);
                let result = ChainResolver::new(&store, &links, &settings.breadcrumb).resolve_chain(
                    &page,
                    &declaration,
                    &self_display,
                );
                Ok(result.markup)
            }
            OutputFormat::Text => {
                let config = plain_text_config(&settings.breadcrumb);
                let result =
                    ChainResolver::new(&store, &PlainLinkRenderer, &config).resolve_chain(&page, &declaration, &self_display);
                Ok(result.trail)
            }
            OutputFormat::Json => {
                let links = HtmlLinkRenderer::from_config(&settings.links);
                let result = ChainResolver::new(&store, &links, &settings.breadcrumb).resolve_chain(
                    &page,
                    &declaration,
                    &self_display,
                );
                report(&page, &result)
            }
        }
    }
}

fn report(page: &PageId, result: &RenderResult) -> Result<String> {
    let report = RenderReport {
        page,
        trail: &result.trail,
        markup: &result.markup,
        dependencies: &result.dependencies,
        termination: result.termination.to_string(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize render report")
}

/// Delimiter and overflow prefix are configured as markup; decode entities for terminal output.
fn plain_text_config(config: &BreadcrumbConfig) -> BreadcrumbConfig {
    let decode = |text: &str| unescape(text).map_or_else(|_| text.to_string(), |decoded| decoded.into_owned());
    BreadcrumbConfig {
        delimiter: decode(&config.delimiter),
        overflow_prefix: decode(&config.overflow_prefix),
        ..config.clone()
    }
}
