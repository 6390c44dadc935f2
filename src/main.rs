use clap::{Arg, Command};
use log::info;
use std::io;
use std::path::PathBuf;

use olind::auth::run_account_shell;
use olind::catalog::run_library_shell;
use olind::utils::io::Terminal;
use olind::utils::logging::{initialize_logging, parse_level};
use olind::{AppConfig, CredentialStore, Library, CONFIG_FILE};

fn cli() -> Command {
    Command::new("olind")
        .about("Account manager and library catalog")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the JSON configuration file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("users-file")
                .long("users-file")
                .help("Path to the account store, overrides the config file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(Command::new("accounts").about("Register, log in and reset passwords (default)"))
        .subcommand(Command::new("library").about("Add, search, borrow and return books"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut config = AppConfig::load(&config_path)?;
    if let Some(users_file) = matches.get_one::<PathBuf>("users-file") {
        config.users_file = users_file.clone();
    }

    if let Err(e) = initialize_logging(&config.log_file, parse_level(&config.log_level)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let stdout = io::stdout();
    match matches.subcommand() {
        Some(("library", _)) => {
            info!("Starting library shell");
            let mut library = Library::with_capacity(config.library_capacity);
            run_library_shell(&mut library, &mut Terminal, &mut stdout.lock())?;
        }
        _ => {
            info!("Starting account shell with store {}", config.users_file.display());
            let mut store = CredentialStore::open(&config.users_file)?;
            run_account_shell(&mut store, &mut Terminal, &mut stdout.lock())?;
        }
    }
    Ok(())
}
