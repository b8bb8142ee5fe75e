mod cli;
mod file_store;
mod logging;
mod replay;

use std::path::PathBuf;
use std::process::ExitCode;

use splitshell_common::ShellError;
use splitshell_config::SplitShellConfig;
use splitshell_layout::KeyValueStore;

use crate::cli::{Args, Command};
use crate::file_store::FileStore;
use crate::logging::Logging;
use crate::replay::ReplayScript;

fn load_config(path: Option<&PathBuf>) -> Result<SplitShellConfig, ShellError> {
    let config = match path {
        Some(path) => {
            let config = splitshell_config::load_from_path(path)?;
            splitshell_config::validation::validate(&config)?;
            config
        }
        None => splitshell_config::load_config()?,
    };
    Ok(config)
}

fn open_store(args: &Args) -> Result<FileStore, ShellError> {
    let path = match &args.store {
        Some(path) => path.clone(),
        None => FileStore::default_path()?,
    };
    Ok(FileStore::new(path))
}

fn run(args: &Args, config: &SplitShellConfig) -> Result<(), ShellError> {
    match &args.command {
        Command::Replay { script } => {
            let script = ReplayScript::load(script)?;
            let store = open_store(args)?;
            let report = replay::run(&script, store, &config.layout)?;
            println!("{report}");
        }
        Command::Show { container_id } => {
            let store = open_store(args)?;
            let key = config.layout.storage_key(container_id);
            match store.get(&key)? {
                Some(value) => println!("{key} = {value}"),
                None => println!("{key} is not set"),
            }
        }
        Command::Reset { container_id } => {
            let mut store = open_store(args)?;
            let key = config.layout.storage_key(container_id);
            store.remove(&key)?;
            tracing::info!("removed {key} from {}", store.path().display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let logging = Logging::init(args.log_level.as_deref());
    tracing::debug!("splitshell v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_ref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SplitShellConfig::default()
    });
    logging.apply_config(config.logging.level);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
