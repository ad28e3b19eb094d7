//! `expenses` - render one page of expenses as HTML.

mod args;
mod transport;

use anyhow::Context;
use clap::Parser;
use expenses_core::{ApiError, ExpensesClient, ExpensesTable};

use args::Args;
use transport::UreqTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("loading page {} from {}", args.page, args.base_url);

    let client = ExpensesClient::new(&args.base_url);
    let (table, fetch) = ExpensesTable::mount(client, UreqTransport::new(), args.page);

    if let Err(err) = tokio::spawn(fetch).await {
        log::error!("fetch task failed: {err}");
        table.fail(ApiError::Unknown);
    }

    let html = if args.document {
        table.render_document()
    } else {
        table.render()
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
