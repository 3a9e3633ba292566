use std::process;
use std::sync::Arc;

use log::{error, info};
use timetable_solver::config::Config;
use timetable_solver::server::{self, AppState};
use timetable_solver::storage::{FileStore, Repository};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    let repository = match &config.data_dir {
        Some(dir) => match FileStore::open(dir) {
            Ok(store) => {
                info!("Using file store at {}", store.dir().display());
                Repository::new(Arc::new(store))
            }
            Err(e) => {
                error!("Could not open data directory: {}", e);
                process::exit(1);
            }
        },
        None => {
            info!("Using in-memory store");
            Repository::in_memory()
        }
    };

    if let Err(e) = server::run_server(&config.bind_addr(), AppState::new(repository)).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
