use std::process::ExitCode;

use boatload::benchmark::TrackingAllocator;
use boatload::cli::Cli;
use clap::Parser;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> ExitCode {
    let cli = Cli::parse();
    boatload::console::init(cli.verbose);

    match boatload::cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
