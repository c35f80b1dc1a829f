//! Ask command.

use crate::assistant::Assistant;
use crate::cli::common::CliResult;
use clap::Args;

/// Ask the portfolio assistant a question
#[derive(Debug, Clone, Args)]
pub struct AskArgs {
    /// Question text (several words are joined)
    #[arg(value_name = "QUESTION", num_args = 0..)]
    pub question: Vec<String>,
}

impl AskArgs {
    /// Execute the ask command
    pub fn execute(&self) -> CliResult<()> {
        println!("{}", Assistant::new().respond(&self.question.join(" ")));
        Ok(())
    }
}
