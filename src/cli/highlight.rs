//! Highlight command.

use crate::cli::common::{bracket_matches, print_json, CliResult};
use crate::highlight::highlight;
use clap::Args;

/// Mark query occurrences inside a piece of text
#[derive(Debug, Clone, Args)]
pub struct HighlightArgs {
    /// Text to scan
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Text to look for (matched literally, ignoring case)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output segments as JSON
    #[arg(long)]
    pub json: bool,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> CliResult<()> {
        let segments = highlight(&self.text, &self.query);
        if self.json {
            print_json(&segments)
        } else {
            println!("{}", bracket_matches(&segments));
            Ok(())
        }
    }
}
