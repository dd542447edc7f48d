//! ParBench CLI entry point.

fn main() {
    if let Err(e) = parbench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
