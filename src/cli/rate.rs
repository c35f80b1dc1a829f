//! Rate command: appends to the ratings log.

use crate::cli::common::{load_config, open_preferences, print_json, CliError, CliResult};
use crate::models::Rating;
use clap::Args;

/// Leave a 1-5 star rating
#[derive(Debug, Clone, Args)]
pub struct RateArgs {
    /// Stars, 1 to 5
    #[arg(value_name = "STARS")]
    pub stars: u8,

    /// Optional comment
    #[arg(long, short)]
    pub comment: Option<String>,

    /// Print the stored rating as JSON
    #[arg(long)]
    pub json: bool,
}

impl RateArgs {
    /// Execute the rate command
    pub fn execute(&self) -> CliResult<()> {
        let rating = Rating::new(self.stars, self.comment.clone())
            .map_err(|e| CliError::validation(e.to_string()))?;

        let config = load_config()?;
        let mut context = open_preferences(&config)?;
        context.store_mut().append_rating(&rating);
        let total = context.store().load_ratings().len();

        if self.json {
            return print_json(&rating);
        }

        println!(
            "Thanks for the {} rating! ({} total)",
            "★".repeat(usize::from(rating.stars)),
            total
        );
        Ok(())
    }
}
