//! Command-line interface.

use clap::{Parser, ValueEnum};
use ddns_core::config::{DEFAULT_IP_CHECK_TIMEOUT_SECS, DEFAULT_TTL};
use ddns_core::{IpCheckConfig, UpdateConfig};
use ddns_provider_route53::AwsOptions;
use std::ffi::OsString;

/// Point a Route 53 A record at the public IP of the machine that runs it.
///
/// Every flag can also be given as an environment variable. AWS credentials
/// are taken from the standard AWS environment (variables, shared profile or
/// instance role).
#[derive(Parser, Debug)]
#[command(author, name = "route53ddns", version)]
pub struct Args {
    /// Record hostname to update 'home.example.com'
    #[arg(long, env = "DDNS_RECORD_NAME")]
    pub name: Option<String>,

    /// Record TTL in seconds
    #[arg(long, env = "DDNS_TTL", default_value_t = DEFAULT_TTL)]
    pub ttl: u32,

    /// Route53 Hosted Zone ID to update
    #[arg(
        long = "hostedZoneID",
        visible_alias = "hosted-zone-id",
        env = "DDNS_HOSTED_ZONE_ID"
    )]
    pub hosted_zone_id: Option<String>,

    /// IP check url, queried in the order given. Replaces the built-in list.
    #[arg(long = "ip-check-url", env = "DDNS_IP_CHECK_URLS", value_delimiter = ',')]
    pub ip_check_urls: Vec<String>,

    /// Per-request timeout for IP check urls, in seconds
    #[arg(long, env = "DDNS_IP_CHECK_TIMEOUT", default_value_t = DEFAULT_IP_CHECK_TIMEOUT_SECS)]
    pub ip_check_timeout: u64,

    /// AWS shared config profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region for the Route 53 client (defaults to the environment, then us-east-1)
    #[arg(long)]
    pub region: Option<String>,

    /// Resolve the IP and log the change batch without submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Run mode; `dry-run` is the same as `--dry-run`
    #[arg(long, env = "DDNS_MODE", value_enum, ignore_case = true, default_value_t = Mode::Live)]
    pub mode: Mode,

    /// Log level
    #[arg(
        long,
        env = "DDNS_LOG_LEVEL",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,
}

impl Args {
    /// Record update configuration
    pub fn update_config(&self) -> UpdateConfig {
        UpdateConfig::new(
            self.name.clone().unwrap_or_default(),
            self.ttl,
            self.hosted_zone_id.clone().unwrap_or_default(),
        )
    }

    /// IP check configuration; the built-in endpoints unless overridden
    pub fn ip_check_config(&self) -> IpCheckConfig {
        let urls = if self.ip_check_urls.is_empty() {
            ddns_ip_http::default_urls()
        } else {
            self.ip_check_urls.clone()
        };

        IpCheckConfig {
            urls,
            timeout_secs: self.ip_check_timeout,
        }
    }

    /// AWS configuration overrides
    pub fn aws_options(&self) -> AwsOptions {
        AwsOptions {
            profile: self.profile.clone(),
            region: self.region.clone(),
        }
    }

    /// Dry-run is on with `--dry-run` or `--mode dry-run` (`DDNS_MODE=dry-run`)
    pub fn dry_run_requested(&self) -> bool {
        self.dry_run || self.mode == Mode::DryRun
    }
}

/// Whether the change batch is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Submit the change to Route 53
    Live,
    /// Log the change batch only
    DryRun,
}

/// Rewrite single-dash long flags (`-name`, `-ttl=60`) to their double-dash
/// form so both spellings are accepted.
///
/// Single-character flags (`-h`, `-V`), negative numbers and everything after
/// a bare `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{}", s))),
            _ => None,
        };

        out.push(rewritten.unwrap_or(arg));
    }

    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };

    let flag = rest.split('=').next().unwrap_or_default();
    !rest.starts_with('-')
        && flag.len() > 1
        && flag.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
