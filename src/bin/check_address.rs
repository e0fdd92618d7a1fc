//! Run the wallet address intake over a list of inputs.
//!
//! Usage: `check_address [ADDRESS...]`. With no arguments, one input per stdin line.
//! Prints one JSON object per input. Exit code: 0 all accepted, 1 any rejected,
//! 2 configuration or I/O failure.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::{info, warn};

use nonce_query::{Config, ValidationError, WalletAddress, telemetry};

fn accepted(input: &str, addr: WalletAddress) -> Result<Value, ValidationError> {
    let checksum = addr.to_address()?.to_checksum(None);
    Ok(json!({
        "input": input,
        "ok": true,
        "walletAddress": addr.into_inner(),
        "checksumAddress": checksum,
    }))
}

fn check(input: &str) -> (bool, Value) {
    match WalletAddress::parse(Some(input)).and_then(|addr| accepted(input, addr)) {
        Ok(line) => (true, line),
        Err(e) => {
            warn!(input, rule = e.rule(), "❌ rejected");
            (
                false,
                json!({ "input": input, "ok": false, "error": e.to_string(), "rule": e.rule() }),
            )
        }
    }
}

/// Writes one line per input, returns whether every input was accepted.
fn check_all<W: Write>(inputs: &[String], out: &mut W) -> Result<bool> {
    let mut rejected = 0usize;
    for input in inputs {
        let (ok, line) = check(input);
        if !ok {
            rejected += 1;
        }
        writeln!(out, "{}", line).context("Failed to write result")?;
    }

    info!(total = inputs.len(), rejected, "✅ check finished");
    Ok(rejected == 0)
}

fn run() -> Result<bool> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read addresses from stdin")?
    } else {
        args
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_all(&inputs, &mut out)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(out: &[u8]) -> Vec<Value> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    /// Validates:
    /// - padded mixed-case input is accepted
    /// - output carries the lower-case form and the original input
    #[test]
    fn accepted_input_reports_normalized_address() {
        let (ok, line) = check(" 0xF605417f2D70BB260DC9b8E9952c02509C00D1E2 ");
        assert!(ok);
        assert_eq!(line["ok"], true);
        assert_eq!(line["input"], " 0xF605417f2D70BB260DC9b8E9952c02509C00D1E2 ");
        assert_eq!(
            line["walletAddress"],
            "0xf605417f2d70bb260dc9b8e9952c02509c00d1e2"
        );
        let checksum = line["checksumAddress"].as_str().unwrap();
        assert_eq!(
            checksum.to_lowercase(),
            "0xf605417f2d70bb260dc9b8e9952c02509c00d1e2"
        );
    }

    /// Validates:
    /// - empty input fails the not-empty rule
    /// - short input fails the address rule
    #[test]
    fn rejected_inputs_report_rule() {
        let (ok, line) = check("");
        assert!(!ok);
        assert_eq!(line["ok"], false);
        assert_eq!(line["rule"], "isNotEmpty");
        assert_eq!(line["error"], "walletAddress should not be empty");

        let (ok, line) = check("0x123");
        assert!(!ok);
        assert_eq!(line["rule"], "isEthereumAddress");
        assert!(line.get("walletAddress").is_none());
    }

    /// Validates:
    /// - one line is written per input, in order
    /// - a single rejected input fails the whole run
    #[test]
    fn one_rejection_fails_the_run() {
        let inputs = vec![
            "0xf605417f2d70bb260dc9b8e9952c02509c00d1e2".to_string(),
            "0x123".to_string(),
        ];
        let mut out = Vec::new();
        assert!(!check_all(&inputs, &mut out).unwrap());

        let written = lines(&out);
        assert_eq!(written.len(), 2);
        assert_eq!(written[0]["ok"], true);
        assert_eq!(written[1]["ok"], false);
    }

    /// Validates:
    /// - all-valid input succeeds
    #[test]
    fn all_valid_inputs_pass() {
        let inputs = vec![
            "0xf605417f2d70bb260dc9b8e9952c02509c00d1e2".to_string(),
            "0XABCDEFABCDEF0123456789ABCDEFABCDEF012345".to_string(),
        ];
        let mut out = Vec::new();
        assert!(check_all(&inputs, &mut out).unwrap());
        assert_eq!(lines(&out).len(), 2);
    }
}
