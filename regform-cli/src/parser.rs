use std::collections::HashMap;

use clap::{Arg, Command};
use regform::{EnvironmentConfig, ENDPOINT_KEY, TIMEOUT_KEY};

use super::subcommands::register::*;

const PROGRAM_NAME: &str = "Regform";

pub fn build_cli() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .about(format!("{}: validate and submit a registration", PROGRAM_NAME))
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("Registration endpoint to post to"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .help("Request timeout in seconds"),
        )
        .subcommand(register_subcommand()) // "register"
}

pub async fn run_cli(args: Vec<String>) -> i32 {
    env_logger::init();
    let matches = build_cli().try_get_matches_from(args);

    match matches {
        Ok(matches) => {
            let config = create_initial_config(&matches);

            match matches.subcommand() {
                Some(("register", matches)) => {
                    handle_register(matches, &config).await
                }
                _ => {
                    // given the `arg_required_else_help(true)` is defined,
                    // only unknown subcommands end up here
                    eprintln!("Unknown subcommand, try '--help'.");
                    1
                }
            }
        }
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                print!("{}", e);
                0
            } else if e.kind()
                == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                eprint!("{}", e);
                2
            } else {
                eprintln!("Error parsing command-line arguments: {}", e);
                eprintln!("For more detailed help, try running '--help'.");
                2
            }
        }
    }
}

fn create_initial_config(matches: &clap::ArgMatches) -> EnvironmentConfig {
    let mut config_hashmap = HashMap::new();
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config_hashmap.insert(ENDPOINT_KEY.to_string(), endpoint.to_string());
    }
    if let Some(timeout) = matches.get_one::<String>("timeout") {
        config_hashmap.insert(TIMEOUT_KEY.to_string(), timeout.to_string());
    }
    EnvironmentConfig::new(config_hashmap)
}
