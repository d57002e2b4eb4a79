use clap::Parser;
use wsc_commands::{Cli, WscCommand};
use wsc_utils::term::print_error;

fn main() {
    let result = Cli::parse().exec();

    match result.map_err(|e| e.to_string()) {
        Err(e) if !e.is_empty() => {
            if let Err(e) = print_error(&e) {
                eprintln!("{e}");
            }
        }
        _ => {}
    }
}
