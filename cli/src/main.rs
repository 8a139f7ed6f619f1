mod command;
mod constants;
mod parser;
mod util;

use std::env;

use clap::Parser;
use constants::GpgwExitCode;
use gpgw_core::config::loader::{default_config_path, load_config_or_default};
use gpgw_core::constants::env_variables::CONFIG_PATH_ENV;
use gpgw_core::util::log::init_logger;
use parser::CliParser;

fn main() {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or(default_config_path());
    process_cli(&config_path);
}

fn process_cli(config_path: &str) {
    let cli_args = CliParser::parse();

    if let Err(e) = init_logger() {
        eprintln!("{}", e);
    }

    let config = match load_config_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config file '{}': {}", config_path, e);
            std::process::exit(GpgwExitCode::ConfigError as i32);
        }
    };

    if let Err(e) = util::apply_log_level(&config, cli_args.verbose) {
        eprintln!("{}", e);
        std::process::exit(GpgwExitCode::ConfigError as i32);
    }

    if let Err((code, e)) = parser::handle_cli(&config, cli_args) {
        eprintln!("{}", e);
        std::process::exit(code);
    }
}
