//! Draughts in the terminal.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use draughts_cli::{CliConfig, Session};
use draughts_engine::{FileStore, RuleConfig, RulePreset, RuleSettings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draughts")]
#[command(about = "Play draughts with configurable rules")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = CliConfig::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play {
        /// Rule preset to play this game with instead of the saved rules
        #[arg(short, long)]
        preset: Option<RulePreset>,
    },
    /// Show or change the saved rules
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Describe the saved rules
    Rules,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the saved rules
    Show,
    /// Change individual rules
    Set {
        #[arg(long)]
        flying_kings: Option<bool>,
        #[arg(long)]
        backwards_capture: Option<bool>,
        #[arg(long)]
        multiple_capture: Option<bool>,
        #[arg(long)]
        force_capture: Option<bool>,
    },
    /// Replace the saved rules with a preset (flying, english, casual)
    Preset { name: RulePreset },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let mut settings = RuleSettings::open(FileStore::new(&config.settings_path))
        .with_context(|| format!("failed to load {}", config.settings_path.display()))?;

    match cli.command {
        Commands::Play { preset } => {
            let rules = preset.map_or_else(|| settings.get(), RulePreset::config);
            tracing::info!(?rules, "starting game");
            let mut session = Session::new(rules, config.render_options());
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout().lock())?;
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => print_settings(&settings.get())?,
            SettingsAction::Set {
                flying_kings,
                backwards_capture,
                multiple_capture,
                force_capture,
            } => {
                let current = settings.get();
                let updated = RuleConfig {
                    flying_kings: flying_kings.unwrap_or(current.flying_kings),
                    backwards_capture: backwards_capture.unwrap_or(current.backwards_capture),
                    multiple_capture: multiple_capture.unwrap_or(current.multiple_capture),
                    force_capture: force_capture.unwrap_or(current.force_capture),
                };
                settings.set(updated)?;
                print_settings(&updated)?;
            }
            SettingsAction::Preset { name } => {
                settings.set(name.config())?;
                println!("Using {} rules", name);
                print_settings(&name.config())?;
            }
        },
        Commands::Rules => {
            for sentence in settings.get().describe() {
                println!("- {}", sentence);
            }
        }
    }

    Ok(())
}

fn print_settings(rules: &RuleConfig) -> anyhow::Result<()> {
    print!("{}", toml::to_string(rules)?);
    Ok(())
}
