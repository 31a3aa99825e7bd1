use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use tracing::{info, warn};

use listrun::Interpreter;

use super::args::CliArgs;
use super::errors::AppError;

/// The fixed diagnostic printed for every recoverable validation failure,
/// kept byte-compatible with existing consumers of the error stream.
const INVALID_INPUT: &str = "Input not valid";

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // An unopenable script is a startup error and fatal; per-command
    // validation failures below are not.
    let file = File::open(&args.script).map_err(|source| AppError::ScriptOpen {
        path: args.script.display().to_string(),
        source,
    })?;

    info!("Executing script: {:?}", args.script);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let mut interpreter = Interpreter::new();
    let mut total = 0usize;
    let mut rejected = 0usize;

    // Each command is fully applied, output included, before the next line
    // is read.
    for line in BufReader::new(file).lines() {
        let line = line.map_err(AppError::Io)?;
        total += 1;
        match interpreter.run_line(&line) {
            Ok(Some(output)) => writeln!(out, "{}", output)?,
            Ok(None) => {}
            Err(e) => {
                warn!("line {}: {}", total, e);
                writeln!(err, "{}", INVALID_INPUT)?;
                rejected += 1;
            }
        }
    }

    info!("Done: {} command(s), {} rejected", total, rejected);
    Ok(())
}
