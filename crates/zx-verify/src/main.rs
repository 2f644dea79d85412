//! `zx-verify` binary: render demo scenes or `.scr` dumps to PNGs or a
//! window and report on the resulting screen.

use std::process;

use zx_verify::{Command, config::USAGE, parse_args, run};

fn main() {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
