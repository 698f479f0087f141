// Tue Jan 13 2026 - Alex

use colored::Colorize;
use layout_probe::ui::cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(2);
        }
    }
}
