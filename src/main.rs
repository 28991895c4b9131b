mod catalog;
mod cli;
mod config;
mod currency;
mod i18n;
mod logging;
mod model;
mod navigation;
mod prefs;
mod state;
mod storage;
mod timer;
mod tui;

use std::process;

use config::Config;
use prefs::Preferences;
use storage::Storage;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    let data_dir = config::data_dir().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    if let Err(e) = logging::init(&data_dir, &config.log_filter) {
        eprintln!("Failed to open log file: {e}");
        process::exit(1);
    }

    let storage = match Storage::new(data_dir.join("prefs")) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    let prefs = match Preferences::load(storage) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to read preferences: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(config, prefs) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
