use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tictactoe::Theme;
use tictactoe::core::config::{self, GameConfig};
use tictactoe::tui;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic Tac Toe in the terminal, with time travel")]
struct Args {
    /// Colour theme to start with
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Where to write the log
    #[arg(long, default_value = "tictactoe.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        GameConfig::default()
    });
    let resolved = config::resolve(&file_config, args.theme);

    log::info!("Tic Tac Toe starting up with theme: {}", resolved.theme);

    tui::run(resolved)
}
