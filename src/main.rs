//! Plate Discipline Server - Binary Entry Point
//!
//! Serves the command interface as line-delimited JSON-RPC on stdio.
//! The data file comes from `PLATE_DISCIPLINE_DATA_FILE` (default
//! `data.json` in the working directory).

use std::env;
use std::path::PathBuf;

use plate_discipline::commands::register_all_commands;
use plate_discipline::logging;
use plate_discipline::{Calculator, CommandServer, ServerInfo, StoreConfig};

const DATA_FILE_ENV: &str = "PLATE_DISCIPLINE_DATA_FILE";

fn data_file_path() -> PathBuf {
    let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match env::var(DATA_FILE_ENV) {
        // join keeps absolute paths as they are
        Ok(path) if !path.trim().is_empty() => current_dir.join(path.trim()),
        _ => current_dir.join("data.json"),
    }
}

fn main() -> std::io::Result<()> {
    logging::init();

    let config = StoreConfig::new(data_file_path());
    tracing::info!(data_file = %config.data_file.display(), "starting");
    let calc = Calculator::open(config).into_shared();

    let mut server = CommandServer::with_info(ServerInfo::default());
    register_all_commands(&mut server, calc);

    server.run()
}
