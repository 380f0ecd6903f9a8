use super::BusnetOperation;
use clap::Parser;

/// builds a persisted transit base from stops and bus routes, then answers
/// statistics and fastest itinerary requests against it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BusnetApp {
    #[command(subcommand)]
    pub op: BusnetOperation,
}
