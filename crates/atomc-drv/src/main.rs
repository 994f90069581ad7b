use std::path::PathBuf;
use std::process::ExitCode;

use atomc_drv::{compile, report, Config, DomainSelector};

const USAGE: &str = "usage: atomc [--dump-domain] <source-file>";

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Config, String> {
    let _program = args.next();
    let mut dump_domain = None;
    let mut input_file = None;

    for arg in args {
        match arg.as_str() {
            "--dump-domain" => dump_domain = Some(DomainSelector::Global),
            _ if input_file.is_none() => input_file = Some(PathBuf::from(arg)),
            _ => return Err(USAGE.to_string()),
        }
    }

    match input_file {
        Some(input_file) => Ok(Config {
            input_file,
            dump_domain,
        }),
        None => Err(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    let config = match parse_args(std::env::args()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match compile(&config) {
        Ok(outcome) => outcome,
        Err(io_err) => {
            eprintln!("{io_err:#}");
            return ExitCode::FAILURE;
        }
    };

    let is_err = outcome.is_err();
    let message = report(&outcome, config.dump_domain);
    if is_err {
        eprintln!("{message}");
        ExitCode::FAILURE
    } else {
        println!("{message}");
        ExitCode::SUCCESS
    }
}
