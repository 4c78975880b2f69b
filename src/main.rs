// SPDX-License-Identifier: MPL-2.0
//! Configuration helper for the inline `ocr-lens-config` block.
//!
//! ```text
//! ocr_lens --print-default-config
//! ocr_lens --check-config page-config.toml
//! ```

use ocr_lens::config::{self, Config};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
ocr_lens configuration helper

USAGE:
  ocr_lens [OPTIONS]

OPTIONS:
  --print-default-config     Print the default configuration as TOML
  --check-config <PATH>      Parse a configuration file and print the effective values
  -h, --help                 Print this help
";

enum Command {
    PrintDefault,
    Check(PathBuf),
    Help,
}

fn parse_args() -> Result<Command, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains("--print-default-config") {
        return Ok(Command::PrintDefault);
    }
    let check: Option<PathBuf> = args.opt_value_from_os_str("--check-config", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(check.map_or(Command::Help, Command::Check))
}

fn main() -> ExitCode {
    let command = match parse_args() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = match command {
        Command::Help => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Command::PrintDefault => Config::default().to_toml_string(),
        Command::Check(path) => config::load_from_path(&path).and_then(|c| c.to_toml_string()),
    };

    match rendered {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
