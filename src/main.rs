// SPDX-License-Identifier: MPL-2.0
use gobarber_client::app::{self, paths, Flags};
use log::LevelFilter;
use std::process::ExitCode;

const HELP: &str = "\
GoBarber desktop client

USAGE:
  gobarber_client [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, pt-BR)
  --config-dir <PATH>    Directory holding settings.toml
  --data-dir <PATH>      Directory holding the stored session
  --log-level <LEVEL>    error, warn, info, debug or trace [default: info]
  -h, --help             Print this help
";

struct Args {
    flags: Flags,
    log_level: LevelFilter,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };
    let log_level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or(LevelFilter::Info);

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(Args { flags, log_level }))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to initialise logging: {err}");
    }

    paths::init_cli_overrides(args.flags.data_dir.clone(), args.flags.config_dir.clone());

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
