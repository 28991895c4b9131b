//! Command line for EDR.
//!
//! With no subcommand the terminal UI starts. The other commands are
//! non-interactive and work on the same preference store the UI uses:
//!
//! - `edr prefs` / `edr prefs set` inspect and change language and currency.
//! - `edr logout` forgets the signed-in user.
//! - `edr convert` runs the fare conversion the UI displays.

mod format;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::currency::Currency;
use crate::i18n::Language;
use crate::prefs::Preferences;
use crate::state::AppState;
use crate::tui;

use format::{format_conversion, format_prefs};

/// EDR — Ethio-Djibouti Railways ticketing in the terminal.
#[derive(Debug, Parser)]
#[command(name = "edr", after_long_help = USAGE_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r"Examples:
  edr                          start the terminal UI
  edr ui --screen tickets      start on a given screen
  edr prefs set --language en --currency DJF
  edr convert 25 USD DJF       → 4425 DJF

Files live under ~/.edr (override with EDR_HOME). Set EDR_LOG to change
the log filter, e.g. EDR_LOG=edr=debug.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the terminal UI. This is the default.
    Ui {
        /// Screen to open instead of the loading screen (e.g. `tickets`).
        ///
        /// `home` lands on login while signed out.
        #[arg(long)]
        screen: Option<String>,
    },

    /// Show or change stored preferences.
    Prefs {
        #[command(subcommand)]
        command: Option<PrefsCommand>,
    },

    /// Forget the signed-in user.
    Logout,

    /// Convert an amount between USD and DJF.
    ///
    /// Pairs other than USD/DJF are printed unchanged.
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Print language, currency and the signed-in user.
    Show,

    /// Change language and/or currency.
    Set {
        /// Display language: `fr` or `en`.
        #[arg(long)]
        language: Option<Language>,

        /// Display currency: `USD` or `DJF`.
        #[arg(long)]
        currency: Option<Currency>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: Config, prefs: Preferences) -> Result<(), String> {
    execute(Cli::parse(), config, prefs)
}

fn execute(cli: Cli, config: Config, mut prefs: Preferences) -> Result<(), String> {
    match cli.command {
        None => cmd_ui(config, prefs, None),
        Some(Command::Ui { screen }) => cmd_ui(config, prefs, screen.as_deref()),
        Some(Command::Prefs { command }) => match command {
            None | Some(PrefsCommand::Show) => {
                print!("{}", format_prefs(&prefs));
                Ok(())
            }
            Some(PrefsCommand::Set { language, currency }) => {
                cmd_prefs_set(&mut prefs, language, currency)
            }
        },
        Some(Command::Logout) => cmd_logout(&mut prefs),
        Some(Command::Convert { amount, from, to }) => {
            println!("{}", format_conversion(amount, &from, &to));
            Ok(())
        }
    }
}

fn cmd_ui(config: Config, prefs: Preferences, screen: Option<&str>) -> Result<(), String> {
    let mut state = AppState::new(config, prefs);
    if let Some(name) = screen {
        state.navigate_named(name, None).map_err(|e| e.to_string())?;
    }
    tui::run(state).map_err(|e| format!("terminal error: {e}"))
}

fn cmd_prefs_set(
    prefs: &mut Preferences,
    language: Option<Language>,
    currency: Option<Currency>,
) -> Result<(), String> {
    if language.is_none() && currency.is_none() {
        return Err("specify --language and/or --currency".to_string());
    }
    if let Some(language) = language {
        prefs
            .set_language(language)
            .map_err(|e| format!("failed to save language: {e}"))?;
    }
    if let Some(currency) = currency {
        prefs
            .set_currency(currency)
            .map_err(|e| format!("failed to save currency: {e}"))?;
    }
    print!("{}", format_prefs(prefs));
    Ok(())
}

fn cmd_logout(prefs: &mut Preferences) -> Result<(), String> {
    let Some(name) = prefs.user().map(|u| u.name.clone()) else {
        println!("Not signed in");
        return Ok(());
    };
    prefs
        .set_user(None)
        .map_err(|e| format!("failed to sign out: {e}"))?;
    info!("signed out from the command line");
    println!("Signed out {name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::model::User;
    use crate::storage::Storage;

    fn test_prefs() -> (TempDir, Preferences) {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(Storage::new(dir.path()).unwrap()).unwrap();
        (dir, prefs)
    }

    fn reload(dir: &TempDir) -> Preferences {
        Preferences::load(Storage::new(dir.path()).unwrap()).unwrap()
    }

    #[test]
    fn no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["edr"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn prefs_set_parses_language_and_currency() {
        let cli =
            Cli::try_parse_from(["edr", "prefs", "set", "--language", "en", "--currency", "DJF"])
                .unwrap();
        let Some(Command::Prefs {
            command: Some(PrefsCommand::Set { language, currency }),
        }) = cli.command
        else {
            panic!("expected prefs set");
        };
        assert_eq!(language, Some(Language::En));
        assert_eq!(currency, Some(Currency::Djf));
    }

    #[test]
    fn bad_language_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["edr", "prefs", "set", "--language", "de"]).is_err());
    }

    #[test]
    fn prefs_set_persists() {
        let (dir, mut prefs) = test_prefs();
        cmd_prefs_set(&mut prefs, Some(Language::En), Some(Currency::Djf)).unwrap();

        let reloaded = reload(&dir);
        assert_eq!(reloaded.language(), Language::En);
        assert_eq!(reloaded.currency(), Currency::Djf);
    }

    #[test]
    fn prefs_set_needs_a_flag() {
        let (_dir, mut prefs) = test_prefs();
        assert!(cmd_prefs_set(&mut prefs, None, None).is_err());
    }

    #[test]
    fn logout_clears_the_user() {
        let (dir, mut prefs) = test_prefs();
        prefs.set_user(Some(User::demo())).unwrap();

        cmd_logout(&mut prefs).unwrap();
        assert!(reload(&dir).user().is_none());

        // Already signed out.
        cmd_logout(&mut prefs).unwrap();
    }

    #[test]
    fn unknown_start_screen_is_an_error() {
        let (_dir, prefs) = test_prefs();
        let err = cmd_ui(Config::default(), prefs, Some("checkout")).unwrap_err();
        assert!(err.contains("checkout"));
    }
}
