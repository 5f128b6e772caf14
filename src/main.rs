use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use vspcheck::{
    Config, ErrorKind, NetworkParams, PolicyMap, SigningContext, TicketChainState,
    ValidationError, VoteChoices,
    node::LiveTicketSet,
    params::current_vote_version,
    registry::{AltSignAddrRecord, MemoryAltSignStore},
    stake,
    validation::{
        can_ticket_vote, decode_transaction, validate_signature, validate_ticket,
        validate_ticket_hash, validate_treasury_policy, validate_tspend_policy,
        validate_vote_choices,
    },
    wire::{Hash, MsgTx},
};

/// Checks a VSP ticket submission and prints a JSON report.
#[derive(Parser, Debug)]
#[command(name = "vspcheck", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(default_value = "config/default.toml")]
    config: String,

    /// Submission JSON file; read from stdin when absent or `-`
    submission: Option<PathBuf>,
}

/// A ticket submission as a VSP client would send it, plus the chain state
/// a request handler would have looked up for it.
#[derive(Debug, Deserialize)]
struct Submission {
    ticket_hash: String,
    ticket_hex: Option<String>,
    vote_version: Option<u32>,
    #[serde(default)]
    vote_choices: VoteChoices,
    #[serde(default)]
    treasury_policy: PolicyMap,
    #[serde(default)]
    tspend_policy: PolicyMap,
    commitment_address: Option<String>,
    signature: Option<String>,
    message: Option<String>,
    alt_sign_addr: Option<String>,
    confirmations: Option<i64>,
    #[serde(default)]
    live_tickets: Vec<Hash>,
}

/// Outcome of a single check in the report.
#[derive(Debug, Serialize)]
struct CheckResult {
    check: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    can_vote: Option<bool>,
}

impl CheckResult {
    fn from_result<T>(check: &'static str, result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self {
                check,
                ok: true,
                kind: None,
                error: None,
                can_vote: None,
            },
            Err(e) => {
                warn!("{check} check failed: {e}");
                Self {
                    check,
                    ok: false,
                    kind: Some(e.kind()),
                    error: Some(e.to_string()),
                    can_vote: None,
                }
            }
        }
    }
}

/// Runs every check that the submission carries enough data for.
async fn run_checks(sub: &Submission, params: &NetworkParams) -> Vec<CheckResult> {
    let mut report = Vec::new();

    let ticket_hash = validate_ticket_hash(&sub.ticket_hash);
    report.push(CheckResult::from_result("ticket_hash", &ticket_hash));

    let mut ticket: Option<MsgTx> = None;
    if let Some(tx_hex) = &sub.ticket_hex {
        let result = decode_transaction(tx_hex).and_then(|tx| {
            validate_ticket(&tx)?;
            Ok(tx)
        });
        report.push(CheckResult::from_result("ticket", &result));
        ticket = result.ok();
    }

    let vote_version = sub.vote_version.unwrap_or_else(|| current_vote_version(params));
    report.push(CheckResult::from_result(
        "vote_choices",
        &validate_vote_choices(params, vote_version, &sub.vote_choices),
    ));
    report.push(CheckResult::from_result(
        "treasury_policy",
        &validate_treasury_policy(&sub.treasury_policy),
    ));
    report.push(CheckResult::from_result(
        "tspend_policy",
        &validate_tspend_policy(&sub.tspend_policy),
    ));

    if let (Some(signature), Some(message)) = (&sub.signature, &sub.message) {
        let commitment_address = sub.commitment_address.clone().or_else(|| {
            let tx = ticket.as_ref()?;
            stake::commitment_address(tx, params).ok().map(|a| a.to_string())
        });

        match commitment_address {
            Some(commitment_address) => {
                let store = MemoryAltSignStore::new();
                if let Some(alt) = &sub.alt_sign_addr {
                    store
                        .insert(sub.ticket_hash.clone(), AltSignAddrRecord::new(alt.clone()))
                        .await;
                }
                let ctx = SigningContext {
                    ticket_hash: &sub.ticket_hash,
                    commitment_address: &commitment_address,
                    signature,
                    message,
                };
                let result = validate_signature(&ctx, &store, params).await;
                report.push(CheckResult::from_result("signature", &result));
            }
            None => warn!("No commitment address available, skipping signature check"),
        }
    }

    if let (Some(confirmations), Ok(hash)) = (sub.confirmations, &ticket_hash) {
        let node = LiveTicketSet::from_iter(sub.live_tickets.iter().copied());
        let state = TicketChainState {
            hash: *hash,
            confirmations,
        };
        let result = can_ticket_vote(&state, &node, params).await;
        let mut entry = CheckResult::from_result("can_vote", &result);
        entry.can_vote = result.ok();
        report.push(entry);
    }

    report
}

/// Reads the submission from `path`, or stdin when no path (or `-`) is given.
fn read_submission(path: Option<&PathBuf>) -> anyhow::Result<Submission> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// The main entry point for the submission checker.
///
/// Exits with status 1 when any check fails.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    let params = config.network_params()?;
    info!("Checking submission on {} (vote version {})", params.net, current_vote_version(&params));

    let submission = read_submission(cli.submission.as_ref())?;

    let report = run_checks(&submission, &params).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !all_passed(&report) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn all_passed(report: &[CheckResult]) -> bool {
    report.iter().all(|r| r.ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const TICKET_HASH: &str = "8b5a3e0c9d2f17e64a4b1c0d9e8f7a6b5c4d3e2f1a0b9c8d7e6f5a4b3c2d1e0f";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["vspcheck"]).unwrap();
        assert_eq!(cli.config, "config/default.toml");
        assert!(cli.submission.is_none());

        let cli = Cli::try_parse_from(["vspcheck", "testnet.toml", "ticket.json"]).unwrap();
        assert_eq!(cli.config, "testnet.toml");
        assert_eq!(cli.submission, Some(PathBuf::from("ticket.json")));

        assert!(Cli::try_parse_from(["vspcheck", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_read_submission_from_file() {
        let path = std::env::temp_dir().join(format!("vspcheck-{}.json", std::process::id()));
        std::fs::write(&path, format!(r#"{{"ticket_hash":"{TICKET_HASH}"}}"#)).unwrap();
        let submission = read_submission(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(submission.ticket_hash, TICKET_HASH);
        assert!(submission.vote_choices.is_empty());
        assert!(submission.confirmations.is_none());
    }

    #[tokio::test]
    async fn test_failed_check_fails_the_report() {
        let params = NetworkParams::simnet();
        let mut submission: Submission =
            serde_json::from_str(&format!(r#"{{"ticket_hash":"{TICKET_HASH}"}}"#)).unwrap();

        let report = run_checks(&submission, &params).await;
        assert!(all_passed(&report));

        submission.ticket_hash.pop();
        let report = run_checks(&submission, &params).await;
        assert!(!all_passed(&report));
        let failed = report.iter().find(|r| !r.ok).unwrap();
        assert_eq!(failed.check, "ticket_hash");
        assert_eq!(failed.kind, Some(ErrorKind::MalformedInput));
    }
}
