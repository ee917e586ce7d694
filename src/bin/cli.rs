// src/bin/cli.rs
use zp_stats::cli;

fn main() {
    // Pretty panic/error reports; a failed install is not fatal.
    let _ = color_eyre::install();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
