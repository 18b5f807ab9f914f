use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fixfont::hotkey::Hotkey;
use fixfont::settings::Settings;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fixfont")]
#[command(version)]
#[command(about = "Inspect and configure the font-fix hotkeys.")]
struct Args {
    #[arg(long, env = "FIXFONT_CONFIG", help = "Settings file to use")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show how a stored hotkey string is interpreted
    Describe { text: String },
    /// Fail unless the text is a well-formed, usable hotkey
    Check { text: String },
    /// Print the stored settings
    Show,
    /// Store a new hotkey
    Set { action: Action, text: String },
    /// Restore the default hotkeys
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Action {
    Fix,
    Show,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    info!("fixfont v{}", env!("CARGO_PKG_VERSION"));
    info!("Args: {:?}", args);

    let settings_path = args.config.unwrap_or_else(Settings::get_settings_path);

    match args.command {
        Command::Describe { text } => {
            let hotkey = Hotkey::from_setting(&text);
            println!("Label:   {hotkey}");
            println!("Setting: {}", hotkey.to_setting());
            println!("Valid:   {}", hotkey.is_valid());
        }
        Command::Check { text } => {
            let hotkey = strict_hotkey(&text)?;
            println!("{hotkey}");
        }
        Command::Show => {
            let settings = Settings::load_from(&settings_path)?;
            print!("{settings}");
        }
        Command::Set { action, text } => {
            let settings = set_hotkey(&settings_path, action, &text)?;
            print!("{settings}");
        }
        Command::Reset => {
            let settings = Settings::default();
            save_settings(&settings, &settings_path)?;
            print!("{settings}");
        }
    }

    Ok(())
}

/// Store `text` as the hotkey for `action`, rejecting anything unusable.
fn set_hotkey(settings_path: &Path, action: Action, text: &str) -> Result<Settings> {
    let hotkey = strict_hotkey(text)?;
    let mut settings = Settings::load_from(settings_path)?;
    match action {
        Action::Fix => settings.hotkeys.fix_font = hotkey,
        Action::Show => settings.hotkeys.show_me = hotkey,
    }
    save_settings(&settings, settings_path)?;
    info!("Stored {:?} hotkey as {}", action, hotkey.to_setting());
    Ok(settings)
}

fn save_settings(settings: &Settings, settings_path: &Path) -> Result<()> {
    settings
        .save_to(settings_path)
        .with_context(|| format!("failed to save settings to {}", settings_path.display()))
}

fn strict_hotkey(text: &str) -> Result<Hotkey> {
    let hotkey = Hotkey::try_parse(text)
        .with_context(|| format!("'{text}' is not a hotkey setting"))?;
    if !hotkey.is_valid() {
        anyhow::bail!("'{hotkey}' needs at least one modifier and a bindable key");
    }
    Ok(hotkey)
}
