// SPDX-License-Identifier: MPL-2.0
use glimpse::app::{self, paths, Flags};

const HELP: &str = "\
Glimpse - minimal image viewer

USAGE:
    glimpse [OPTIONS] [FILE]

OPTIONS:
    --config-dir DIR    Directory holding settings.toml
    -h, --help          Print this help

ENVIRONMENT:
    GLIMPSE_CONFIG_DIR  Config directory, when --config-dir is not given
    RUST_LOG            Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("glimpse: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    paths::init_cli_override(config_dir);

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags { file_path })
}
