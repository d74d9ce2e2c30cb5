//! Single binary CLI: reads participant names from a text file (one per line)
//! and writes the generated double round-robin schedule to an output file.
//! Run with: cargo run --bin cli -- [input] [output] [--json]
//! Defaults: input entry.txt, output out.txt.
//! Override log verbosity with env: RUST_LOG (e.g. RUST_LOG=debug).

use championship_scheduler::{generate_schedule, Participant, Schedule, ScheduleError};
use std::fs;
use std::process::ExitCode;

/// Generation attempts per invocation. The greedy builder can dead-end, and
/// retrying with fresh randomness is a caller decision, so this loop lives
/// in the adapter rather than the core.
const MAX_ATTEMPTS: u32 = 5;

/// Adapter configuration: file paths and output format.
struct CliConfig {
    in_path: String,
    out_path: String,
    json: bool,
}

fn default_in_path() -> String {
    "entry.txt".to_string()
}

fn default_out_path() -> String {
    "out.txt".to_string()
}

fn parse_args() -> CliConfig {
    let mut positional = Vec::new();
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();
    CliConfig {
        in_path: positional.next().unwrap_or_else(default_in_path),
        out_path: positional.next().unwrap_or_else(default_out_path),
        json,
    }
}

/// Read one participant per line, trimming whitespace and skipping blank
/// lines. Name validation happens at `Participant` construction.
fn read_participants(path: &str) -> Result<Vec<Participant>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let mut participants = Vec::new();
    for line in content.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        participants.push(Participant::new(name)?);
    }
    Ok(participants)
}

/// Run up to `MAX_ATTEMPTS` generation attempts, each with fresh randomness.
/// Input errors are not retried.
fn generate_with_retry(participants: &[Participant]) -> Result<Schedule, ScheduleError> {
    let mut attempt = 1;
    loop {
        match generate_schedule(participants) {
            Ok(schedule) => return Ok(schedule),
            Err(ScheduleError::Generation(err)) if attempt < MAX_ATTEMPTS => {
                log::warn!(
                    "Generation attempt {}/{} failed: {}",
                    attempt,
                    MAX_ATTEMPTS,
                    err
                );
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let participants = read_participants(&config.in_path)?;
    log::debug!(
        "Participants := {:?}",
        participants.iter().map(|p| p.name()).collect::<Vec<_>>()
    );

    let schedule = generate_with_retry(&participants)?;

    let rendered = if config.json {
        serde_json::to_string_pretty(&schedule)?
    } else {
        schedule.to_string()
    };

    log::info!("Writing result to file {}", config.out_path);
    fs::write(&config.out_path, rendered)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = parse_args();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
