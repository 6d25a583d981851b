use crate::error::Result;
use crate::ticket::TicketList;
use clap::Parser;
use std::path::Path;

mod codec;
mod error;
mod logger;
mod report;
mod stats;
mod ticket;

const TICKETS_PATH: &str = "tickets.json";

#[derive(Parser)]
#[command(about = "Minimum flight time per carrier and price statistics for tickets.json")]
struct Args {
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Loads the tickets and renders both reports. Nothing is rendered unless both aggregations succeed.
fn run(path: &Path) -> Result<String> {
    let list = TicketList::load_from_file(path)?;

    let durations = stats::min_durations_by_carrier(&list.tickets);
    let prices = stats::price_statistics(&list.tickets)?;

    Ok(format!(
        "{}\n{}",
        report::durations_report(&durations),
        report::prices_report(&prices)
    ))
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    match run(Path::new(TICKETS_PATH)) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("Run aborted: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
