use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod items;
mod render;
mod theme;
mod wheel;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    cli.run()
}
