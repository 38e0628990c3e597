//! `idcodec` — operator tool for issuing and inspecting identifier tokens.
//!
//! Startup sequence:
//! 1. Parse command line arguments.
//! 2. Load and validate [`Config`](config::Config) from environment variables.
//! 3. Initialise structured JSON logging.
//! 4. Build the codec and run the requested command, printing JSON on stdout.

mod commands;
mod config;
mod output;
mod telemetry;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use idcodec::{Codec, ProjectId};
use serde::Serialize;

/// Command line arguments.
#[derive(Debug, Parser)]
#[clap(name = "idcodec", version)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a user id and project id into a URL-safe token.
    Encode {
        /// Application-assigned user id; must not be empty.
        #[clap(long)]
        user: String,

        /// 64-bit project id.
        #[clap(long, allow_negative_numbers = true)]
        project: ProjectId,
    },
    /// Decode a token back into its user id and project id.
    Decode {
        /// Token previously produced by `encode`.
        token: String,
    },
}

fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Arguments
    // -----------------------------------------------------------------------
    let args = Args::parse();

    // -----------------------------------------------------------------------
    // 2. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: idcodec configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 3. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    // -----------------------------------------------------------------------
    // 4. Command
    // -----------------------------------------------------------------------
    let key = cfg.key()?;
    let codec = Codec::with_key(key.as_bytes()).context("failed to build codec")?;

    match &args.command {
        Command::Encode { user, project } => emit(commands::encode(&codec, user, *project)),
        Command::Decode { token } => emit(commands::decode(&codec, token)),
    }
}

/// Print the command result as one JSON line; failures exit non-zero.
fn emit<T: Serialize, E: Serialize>(result: Result<T, E>) -> Result<ExitCode> {
    let (line, code) = match result {
        Ok(out) => (serde_json::to_string(&out)?, ExitCode::SUCCESS),
        Err(err) => (serde_json::to_string(&err)?, ExitCode::FAILURE),
    };
    println!("{line}");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_with_negative_project() {
        let args = Args::try_parse_from(["idcodec", "encode", "--user", "alice", "--project", "-1"])
            .unwrap();
        assert!(matches!(
            args.command,
            Command::Encode { ref user, project: -1 } if user == "alice"
        ));
    }

    #[test]
    fn parses_decode() {
        let args = Args::try_parse_from(["idcodec", "decode", "e7"]).unwrap();
        assert!(matches!(args.command, Command::Decode { ref token } if token == "e7"));
    }

    #[test]
    fn encode_requires_project() {
        assert!(Args::try_parse_from(["idcodec", "encode", "--user", "alice"]).is_err());
    }
}
