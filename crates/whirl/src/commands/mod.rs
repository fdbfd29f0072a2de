pub mod completion;
pub mod config;

use colored::Colorize;

pub fn print_version() {
    println!("{} {}", "whirl".bold(), env!("CARGO_PKG_VERSION"));
}
