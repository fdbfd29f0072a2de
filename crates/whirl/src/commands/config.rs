use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    println!("{}", "Configuration".bold());
    println!("  {}", path.display().to_string().dimmed());
    println!();
    println!(
        "  defaults.theme     {}",
        defaults.theme.as_deref().unwrap_or("dark (default)")
    );
    println!(
        "  defaults.windowed  {}",
        defaults
            .windowed
            .map(|w| w.to_string())
            .unwrap_or_else(|| "false (default)".to_string())
    );
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Saved".green());
    println!("  {}", path.display().to_string().dimmed());
    Ok(())
}
