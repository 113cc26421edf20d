//! Suggest a directive for a page created from a referrer URL.

use anyhow::{Result, bail};
use clap::Args;

use super::open_store;
use crate::config::CrumbtrailConfig;
use crate::seeder::PreloadSeeder;

/// Command to suggest the initial breadcrumb directive of a new page.
///
/// Prints nothing when the referring page is unknown or has no directive.
#[derive(Args, Debug)]
pub struct SuggestCommand {
    /// URL of the page the new page was created from
    referer: String,

    /// Text preceding the page title in URLs (defaults to `breadcrumb.url_path_separator`)
    #[arg(short, long)]
    separator: Option<String>,
}

impl SuggestCommand {
    /// Create a suggest command.
    #[must_use]
    pub fn new(referer: impl Into<String>, separator: Option<String>) -> Self {
        Self {
            referer: referer.into(),
            separator,
        }
    }

    /// Print the suggestion, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is empty.
    pub fn execute(self, settings: &CrumbtrailConfig) -> Result<()> {
        if let Some(suggestion) = self.run(settings)? {
            println!("{suggestion}");
        }
        Ok(())
    }

    /// Compute the suggestion.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is empty.
    pub fn run(&self, settings: &CrumbtrailConfig) -> Result<Option<String>> {
        let separator = self.separator.as_deref().unwrap_or(&settings.breadcrumb.url_path_separator);
        if separator.is_empty() {
            bail!("The URL path separator must not be empty");
        }

        let store = open_store(settings);
        Ok(PreloadSeeder::new(&store).suggest(&self.referer, separator))
    }
}
