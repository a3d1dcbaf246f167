mod cache;
mod command_handler;
mod config;
mod constants;
mod errors;
mod handlers;
mod http;
mod runner;
mod types;
mod versions;

use config::LauncherConfig;
use log::error;
use std::env;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = command_handler::handle_args(env::args(), LauncherConfig::from_env()).await;

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(err.exit_code());
    }
}
