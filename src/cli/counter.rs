//! Counter command.

use crate::cli::common::{load_config, print_json, CliResult};
use crate::constants::COUNTER_FALLBACK;
use crate::counter::{fetch_display, HttpCounter};
use clap::Args;
use serde::Serialize;

/// Fetch the visitor and hit counters
#[derive(Debug, Clone, Args)]
pub struct CounterArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CounterOutput {
    visitors: String,
    hits: String,
}

impl CounterArgs {
    /// Execute the counter command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let output = if config.counter.enabled {
            CounterOutput {
                visitors: fetch_display(&HttpCounter::visitors(&config.counter)),
                hits: fetch_display(&HttpCounter::hits(&config.counter)),
            }
        } else {
            CounterOutput {
                visitors: COUNTER_FALLBACK.to_string(),
                hits: COUNTER_FALLBACK.to_string(),
            }
        };

        if self.json {
            return print_json(&output);
        }

        println!("Visitors: {}", output.visitors);
        println!("Hits:     {}", output.hits);
        Ok(())
    }
}
