//! folio CLI entry point.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use folio::commands;
use folio::config::Config;
use folio::content::Profile;
use folio::theme::{current_theme, Theme};
use folio::viewer::{self, ViewerOptions};

#[derive(Parser)]
#[command(
    name = "folio",
    version = folio::version_string(),
    about = "An animated personal portfolio for the terminal",
    long_about = "Renders a scrollable portfolio page in the terminal, with a \
                  typewriter hero section and scroll-triggered section reveals.\n\
                  Run without a subcommand to open the interactive viewer."
)]
struct Cli {
    /// Theme to use (parchment, classic, ocean)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Disable the typewriter and reveal animations
    #[arg(long)]
    no_anim: bool,

    /// Disable mouse capture (wheel scrolling)
    #[arg(long)]
    no_mouse: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the portfolio to stdout (non-interactive)
    Print {
        /// Output width in columns (default: terminal width)
        #[arg(long)]
        width: Option<usize>,
    },
    /// Export the portfolio content as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}

/// Resolve viewer options from the config file and CLI overrides.
fn viewer_options(cli: &Cli, config: &Config) -> ViewerOptions {
    let theme_name = cli
        .theme
        .clone()
        .unwrap_or_else(|| config.ui.theme.clone());
    // An unknown name falls back to the default theme rather than
    // erroring; warn so the typo is discoverable.
    let theme_name = if Theme::by_name(&theme_name).is_some() {
        theme_name
    } else {
        eprintln!("warning: unknown theme {:?}, using default", theme_name);
        "parchment".to_string()
    };
    ViewerOptions {
        theme_name,
        timing: config.typewriter.timing(),
        animate: config.reveal.animate && !cli.no_anim,
        mouse: config.ui.mouse && !cli.no_mouse,
    }
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(&cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("error: {:#}", err)));
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Command::Print { width }) => commands::print::handle_print(*width),
        Some(Command::Export { pretty }) => commands::export::handle_export(*pretty),
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Some(Command::Completions { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "folio", &mut io::stdout());
            Ok(())
        }
        None => {
            let config = Config::load()?;
            let options = viewer_options(cli, &config);
            viewer::run(Profile::builtin(), &options)
        }
    }
}
