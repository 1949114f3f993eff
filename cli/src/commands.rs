pub mod check;

use clap::{ArgAction, Parser, Subcommand};
use leakcheck_common::config::{CONSISTENCY_TIMEOUT_MS, Config};

#[derive(Parser)]
#[command(name = "leakcheck")]
#[command(about = "Checks whether a VPN is hiding this device.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to keep only verdict lines
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Log debug details of every probe
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Deadline of each consistency probe in milliseconds
    #[arg(long, global = true, default_value_t = CONSISTENCY_TIMEOUT_MS)]
    pub consistency_timeout_ms: u64,

    /// Base URL of the geo-IP service; the IP is appended to it
    #[arg(long, global = true)]
    pub geo_endpoint: Option<String>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Commands {
    /// VPN status, public IP, IP consistency, DNS exposure and local addresses
    #[command(alias = "b")]
    Basic,
    /// WebRTC, geolocation, time and locale, VPN range
    #[command(alias = "a")]
    Advanced,
    /// Basic check followed by the advanced one
    All,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let mut cfg = Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            ..Config::default()
        }
        .with_consistency_timeout(self.consistency_timeout_ms);

        if let Some(endpoint) = &self.geo_endpoint {
            cfg = cfg.with_geo_endpoint(endpoint.clone());
        }
        cfg
    }
}
