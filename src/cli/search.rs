//! Search command: suggestions plus the filtered page.

use crate::cli::common::{bracket_matches, print_json, CliError, CliResult};
use crate::panels::{Page, PanelView, ScrollTarget};
use crate::search::{CatalogEntry, SearchIndex};
use clap::Args;
use serde::Serialize;

/// Run a query against the catalog and every content panel
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: String,
    suggestions: Vec<&'a CatalogEntry>,
    panels: Vec<PanelView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll_to: Option<ScrollTarget>,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let index = SearchIndex::load()
            .map_err(|e| CliError::io(format!("Failed to load search catalog: {e:#}")))?;
        let page =
            Page::load().map_err(|e| CliError::io(format!("Failed to load content: {e:#}")))?;

        let view = page.render(&self.query);
        let output = SearchOutput {
            query: view.query.clone(),
            suggestions: index.suggest(&self.query),
            scroll_to: view.first_match(),
            panels: view.panels,
        };

        if self.json {
            return print_json(&output);
        }

        if output.suggestions.is_empty() {
            println!("No suggestions.");
        } else {
            println!("Suggestions:");
            for entry in &output.suggestions {
                println!("  {} ({})", entry.title, entry.category);
            }
        }

        for panel in output.panels.iter().filter(|p| p.visible) {
            println!();
            println!("== {} ==", panel.id);
            for item in &panel.items {
                println!("  {}", bracket_matches(&item.heading));
                for line in &item.lines {
                    println!("    {}", bracket_matches(line));
                }
            }
        }

        let hidden: Vec<String> = output
            .panels
            .iter()
            .filter(|p| !p.visible)
            .map(|p| p.id.to_string())
            .collect();
        if !hidden.is_empty() {
            println!();
            println!("Hidden (no matches): {}", hidden.join(", "));
        }

        Ok(())
    }
}
