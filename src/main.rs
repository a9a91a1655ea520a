//! Parking Reserve CLI
//!
//! Usage:
//!   parking-reserve [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Lot configuration (TOML format)
//!   --no-status          Do not redisplay status after reserve/vacate
//!   -l, --list           List space identifiers and vehicle types
//!   -h, --help           Print help

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parking_reserve::{parse, Command, LotConfig, ParseError, Session, SessionConfig};

#[derive(Parser)]
#[command(name = "parking-reserve")]
#[command(about = "Reserve and vacate parking spaces")]
struct Cli {
    /// Command script (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Lot configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not redisplay the full status after each reserve/vacate
    #[arg(long)]
    no_status: bool,

    /// List space identifiers and vehicle types, then exit
    #[arg(short, long)]
    list: bool,
}

/// Log to stderr; RUST_LOG overrides the default `warn` level
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let lot = match &cli.config {
        Some(path) => match LotConfig::from_file(path) {
            Ok(lot) => lot,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => LotConfig::default(),
    };

    let config = SessionConfig::new()
        .with_lot(lot)
        .with_show_status(!cli.no_status);
    let mut session = match Session::with_config(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.list {
        for command in [Command::Spaces, Command::Vehicles] {
            for line in session.execute(&command).lines {
                println!("{}", line);
            }
        }
        return ExitCode::SUCCESS;
    }

    if cli.input.is_none() && io::stdin().is_terminal() {
        return interactive(&mut session);
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            (buffer, "<stdin>".to_string())
        }
    };

    match parse(&source) {
        Ok(script) => {
            for line in session.run(&script) {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(errors) => {
            report_errors(&errors, &source, &filename);
            ExitCode::FAILURE
        }
    }
}

/// Prompt loop; each line is parsed and run on its own
fn interactive(session: &mut Session) -> ExitCode {
    println!("Parking Reserve - type 'help' for commands, 'quit' to stop.");
    for line in session.status_block() {
        println!("{}", line);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        // A failed flush only loses the prompt
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }

        let script = match parse(&line) {
            Ok(script) => script,
            Err(errors) => {
                report_errors(&errors, &line, "<input>");
                continue;
            }
        };
        for command in &script.commands {
            let outcome = session.execute(&command.node);
            for out in outcome.lines {
                println!("{}", out);
            }
            if outcome.quit {
                return ExitCode::SUCCESS;
            }
        }
    }
}

fn report_errors(errors: &[ParseError], source: &str, filename: &str) {
    for e in errors {
        eprint!("{}", e.format(source, filename));
    }
}
