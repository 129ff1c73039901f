use clap::Parser;
use degrees_core::{Algorithm, SearchConfig};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "degrees")]
#[command(about = "Find the shortest chain of shared movies between two people")]
pub struct Args {
    /// First person's name (asked for on the terminal when omitted)
    pub source: Option<String>,

    /// Second person's name (asked for on the terminal when omitted)
    pub target: Option<String>,

    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, value_name = "DIR", env = "DEGREES_DATA", default_value = "large")]
    pub data: PathBuf,

    /// Search strategy (bfs guarantees the fewest movies)
    #[arg(short, long, value_name = "ALGORITHM", default_value = "bfs", value_parser = ["bfs", "dfs"])]
    pub algorithm: String,

    /// Give up after expanding this many people
    #[arg(long, value_name = "COUNT")]
    pub max_expansions: Option<usize>,

    /// Show person and movie IDs in output
    #[arg(short = 'i', long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the degrees line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(Algorithm::from(self.algorithm.as_str()), self.max_expansions)
    }
}
