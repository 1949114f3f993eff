mod commands;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use commands::{CommandLine, check};
use leakcheck_core::orchestrator::{Orchestrator, Ports, Session};
use terminal::{logging, print, sink::TerminalSink};
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    log_device_info();

    let cfg = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    let ports = Ports::system().context("could not set up the HTTP client")?;
    let sink = Arc::new(TerminalSink::new(cfg.quiet));
    let session = Session::new();

    let watcher = session.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            watcher.close();
        }
    });

    let orchestrator = Orchestrator::new(ports, cfg, sink, session);
    let outcome = check::run(commands.command, &orchestrator).await;

    print::end_of_program();
    outcome
}

fn log_device_info() {
    let hostname = sys_info::hostname().unwrap_or_else(|_| "unknown".to_string());
    let os_type = sys_info::os_type().unwrap_or_else(|_| "unknown".to_string());
    let os_release = sys_info::os_release().unwrap_or_else(|_| "unknown".to_string());

    debug!("leakcheck v{}", env!("CARGO_PKG_VERSION"));
    debug!("Device: {hostname}");
    debug!("System: {os_type} {os_release}");
}
