use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "whirl")]
#[command(author, version, about)]
#[command(long_about = "An interactive lottery wheel picker.\n\n\
    Load the wheel with your own labels, then spin it with a click, the\n\
    space bar, or a flick of the pointer and let it choose for you.\n\n\
    Examples:\n  \
    whirl                        Launch with the starter wheel\n  \
    whirl tea coffee water       Launch with custom labels\n  \
    whirl --windowed             Launch in a window instead of fullscreen\n  \
    whirl --theme light          Launch with the light theme")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Labels to load onto the wheel (defaults to a built-in starter list)
    pub labels: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Theme to start with
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.windowed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => crate::app::run(
                self.labels,
                self.windowed,
                self.theme.map(|t| t.name().to_string()),
            ),
        }
    }
}
