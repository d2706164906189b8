mod app;
mod colors;
mod config;
mod input;
mod presenter;
mod terminal;
mod view;

use std::path::PathBuf;

use clap::Parser;
use common::logger::{self, LogSink};
use common::log;

use app::App;

#[derive(Parser)]
#[command(name = "tictactoe_console", version, about = "Console tic-tac-toe")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    no_color: bool,
    #[arg(long)]
    no_sound: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::get_config_manager(args.config).get_config()?;
    if args.no_color {
        config.settings.color_enabled = false;
    }
    if args.no_sound {
        config.settings.sound_enabled = false;
    }

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    let sink = match args.log_file.or_else(|| config.log_file.as_ref().map(PathBuf::from)) {
        Some(path) => LogSink::file(&path)?,
        None => LogSink::Disabled,
    };
    logger::init_logger(prefix, sink);

    log!("Starting with settings {:?}", config.settings);

    App::new(&config).run()?;

    log!("Exited normally");

    Ok(())
}
