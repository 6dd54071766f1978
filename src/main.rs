// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use wavedrop::app::{self, Flags};

const HELP: &str = "\
wavedrop - drop an audio file, send it as 24 kHz mono WAV

USAGE:
  wavedrop [OPTIONS]

OPTIONS:
  --lang <ID>               UI language (e.g. en-US, fr)
  --endpoint <URL>          Upload endpoint, overrides settings.toml
  --config-dir <DIR>        Directory holding settings.toml
  --diagnostics-out <PATH>  Write a diagnostics report on exit (file or directory)
  -h, --help                Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        diagnostics_out: args.opt_value_from_str::<_, PathBuf>("--diagnostics-out")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
