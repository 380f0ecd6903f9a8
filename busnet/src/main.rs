//! two-phase transit query tool. `make-base` reads stops and bus routes,
//! builds the routing tables and persists them; `process-requests` loads the
//! persisted base and answers route, stop and itinerary requests.
use busnet::app::BusnetApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = BusnetApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("busnet failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
