use std::path::PathBuf;

use clap::Parser;
use expenses_core::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "expenses", version, about = "Fetch a page of expenses and render it as an HTML table")]
pub struct Args {
    /// Base URL of the transactions API
    #[arg(long, env = "EXPENSES_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Page to request
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Wrap the table in a complete HTML document
    #[arg(long)]
    pub document: bool,

    /// Write the markup to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
