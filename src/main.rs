//! aacboard main entry point
//!
//! Loads a board definition, then reads commands from stdin until quit or
//! end of input. Picked items are spoken through the configured synthesizer.

use aacboard::input::{CommandHandler, HandlerAction};
use aacboard::speech::create_synth;
use aacboard::state::config::Config;
use aacboard::state::State;
use aacboard::{LoadMode, Result};
use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

/// Command line options
#[derive(Debug, Default)]
struct Args {
    debug: bool,
    strict: bool,
    config: Option<PathBuf>,
    board: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => args.debug = true,
            "--strict" => args.strict = true,
            "--config" | "-c" => {
                let path = iter.next().ok_or("--config needs a file")?;
                args.config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                return Err(format!(
                    "Usage: {} [-d|--debug] [-c|--config FILE] [--strict] [BOARD_FILE]",
                    aacboard::APP_NAME
                ))
            }
            other if other.starts_with('-') => return Err(format!("Unknown option: {}", other)),
            other => args.board = Some(PathBuf::from(other)),
        }
    }

    Ok(args)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    // Initialize logger
    if args.debug {
        // Debug mode: write to aacboard.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("aacboard.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open aacboard.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "aacboard version {} starting (debug mode, logging to aacboard.log)",
            aacboard::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(args) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    info!("Configuration loaded from {:?}", config.path());

    let mode = if args.strict {
        LoadMode::Strict
    } else {
        config.load_mode()
    };
    let board_path = args.board.clone().unwrap_or_else(|| config.board_file());

    let synth = create_synth(&config)?;
    let mut state = State::open(config, synth, board_path, mode)?;
    let mut handler = CommandHandler::new();

    println!(
        "{} {} - {} categories from {}",
        aacboard::APP_NAME,
        aacboard::VERSION,
        state.board.category_count(),
        state.board_path().display()
    );
    println!("Type help for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}> ", prompt(&state));
        stdout.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            state.shutdown()?;
            return Ok(());
        };

        let action = handler.process_line(&line?, &mut state, &mut stdout)?;
        if action == HandlerAction::Quit {
            info!("Leaving command loop");
            return Ok(());
        }
    }
}

fn prompt(state: &State) -> String {
    match state.board.current() {
        Some(_) => state.board.get_category().to_string(),
        None => "home".to_string(),
    }
}
