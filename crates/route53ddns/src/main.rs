// # route53ddns
//
// One-shot dynamic DNS updater for AWS Route 53.
//
// Each invocation resolves the machine's public IP through an ordered list
// of HTTP echo endpoints, UPSERTs a single A record with it, logs the result
// and exits. Scheduling is left to cron or a systemd timer.
//
// ## Usage
//
// ```bash
// route53ddns -name home.example.com -hostedZoneID Z0123456789ABC -ttl 60
// ```
//
// Go-style single-dash flags and the usual `--flag` spelling are both
// accepted. Every flag also has an environment fallback:
//
// - `DDNS_RECORD_NAME`, `DDNS_TTL`, `DDNS_HOSTED_ZONE_ID`
// - `DDNS_IP_CHECK_URLS`: comma-separated override of the echo endpoints
// - `DDNS_IP_CHECK_TIMEOUT`: per-endpoint timeout in seconds
// - `DDNS_MODE=dry-run`: log the change batch instead of submitting it
// - `DDNS_LOG_LEVEL`: trace, debug, info, warn or error
//
// AWS credentials come from the standard AWS provider chain.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use ddns_core::{DdnsEngine, IpCheckConfig, UpdateConfig, UpdateReport};
use ddns_provider_route53::Route53Provider;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Args;

/// Exit codes
///
/// - 0: The record was updated (or dry-run completed)
/// - 1: Invalid arguments; nothing was contacted
/// - 2: IP resolution or the DNS update failed
#[derive(Debug, Clone, Copy)]
enum DdnsExitCode {
    /// Successful run
    Success = 0,
    /// Configuration error
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return DdnsExitCode::ConfigError.into();
        }
    };

    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::ConfigError.into();
    }

    let started = Instant::now();
    info!("start route53ddns");

    let code = run(&args);

    info!("end route53ddns runtime:{:?}", started.elapsed());
    code.into()
}

/// Validate, then run the update on a single-threaded runtime
fn run(args: &Args) -> DdnsExitCode {
    let config = args.update_config();
    let ip_check = args.ip_check_config();

    if let Err(e) = config.validate().and_then(|_| ip_check.validate()) {
        error!("{}", e);
        return DdnsExitCode::ConfigError;
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::RuntimeError;
        }
    };

    match rt.block_on(update(args, &config, &ip_check)) {
        Ok(report) => {
            info!(
                "updated {} to {} in {:?}",
                config.name, report.ip, report.elapsed
            );
            DdnsExitCode::Success
        }
        Err(e) => {
            error!("{:#}", e);
            let is_config = e
                .downcast_ref::<ddns_core::Error>()
                .is_some_and(|e| e.is_config());
            if is_config {
                DdnsExitCode::ConfigError
            } else {
                DdnsExitCode::RuntimeError
            }
        }
    }
}

/// Wire the HTTP sources and the Route 53 provider into the engine
async fn update(
    args: &Args,
    config: &UpdateConfig,
    ip_check: &IpCheckConfig,
) -> Result<UpdateReport> {
    let resolver = ddns_ip_http::resolver_from_config(ip_check)
        .context("Failed to create IP check sources")?;

    let dry_run = args.dry_run_requested();
    if dry_run {
        info!("Dry-run mode: the change batch will be logged, not submitted");
    }

    let provider = Route53Provider::from_env(&args.aws_options(), dry_run).await;
    let engine = DdnsEngine::new(resolver, Box::new(provider));

    Ok(engine.run_once(config).await?)
}
