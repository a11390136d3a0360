use clap::Parser;

use playpage::cli::{self, Cli};
use playpage::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("❌ {}", err);
        std::process::exit(1);
    }
}
