//! Show the breadcrumb declaration of a page.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::{open_store, read_page};
use crate::config::CrumbtrailConfig;
use crate::directive::{Declaration, extract_declaration};

/// Command to print the declaration found in a page as JSON.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Page to inspect
    page: String,
}

impl ExtractCommand {
    /// Create an extract command.
    #[must_use]
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
        }
    }

    /// Print the declaration, or a notice on stderr when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be read.
    pub fn execute(self, settings: &CrumbtrailConfig) -> Result<()> {
        match self.run(settings)? {
            Some(declaration) => {
                println!("{}", serde_json::to_string_pretty(&declaration)?);
            }
            None => {
                eprintln!("{} '{}' has no breadcrumb directive", "note:".yellow().bold(), self.page);
            }
        }
        Ok(())
    }

    /// Read the page and extract its declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is missing or its name is invalid.
    pub fn run(&self, settings: &CrumbtrailConfig) -> Result<Option<Declaration>> {
        let store = open_store(settings);
        let (_, revision) =
            read_page(&store, &self.page).with_context(|| format!("Cannot read page '{}'", self.page))?;
        Ok(extract_declaration(&revision.text))
    }
}
