//! # Check Orchestration
//!
//! Runs the basic and advanced checks. Each check is a fixed fan-out of independent tasks joined
//! with wait-for-all semantics; every sub-check reports its own [`CheckResult`] so a failure in
//! one never hides the others.
//!
//! The orchestrator is the only component that talks to the [`ReportSink`]. Closing the
//! [`Session`] drops the in-flight join set, which aborts every task of the run.

use std::sync::Arc;

use leakcheck_common::config::Config;
use leakcheck_common::error::ProbeError;
use leakcheck_common::models::geo::GeoRecord;
use leakcheck_common::models::report::{
    AdvancedReport, BasicReport, CheckResult, DnsExposure, LocalAddresses, RunError, VpnRangeVerdict,
};
use leakcheck_common::models::system::{TimeSnapshot, WebRtcStatus};
use leakcheck_common::models::verdict::ConsistencyVerdict;
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use leakcheck_common::ports::outbound::system_repository::{
    ConnectivityProvider, InterfaceSource, LocaleSource, WebRtcProbe,
};
use leakcheck_common::ports::outbound::ui::ReportSink;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::consistency::ConsistencyChecker;
use crate::dns_exposure::check_dns_exposure;
use crate::geo::GeoLocator;
use crate::local_addresses::list_local_addresses;
use crate::locale::SystemLocale;
use crate::network::http::HttpFetcher;
use crate::resolver::PublicIpResolver;
use crate::system::SystemRepo;
use crate::vpn_range::vpn_range_verdict;
use crate::webrtc::PathWebRtcProbe;

mod session;

pub use session::Session;

pub const BASIC_COMPLETE_NOTICE: &str = "Basic check complete!";
pub const ADVANCED_COMPLETE_NOTICE: &str = "Advanced tests complete!";

// ┌──────────────────────────────────────────────────────────┐
// │ Outbound Ports                                           │
// └──────────────────────────────────────────────────────────┘

/// Everything a run needs from the outside world.
#[derive(Clone)]
pub struct Ports {
    pub fetcher: Arc<dyn Fetcher>,
    pub interfaces: Arc<dyn InterfaceSource>,
    pub connectivity: Arc<dyn ConnectivityProvider>,
    pub locale: Arc<dyn LocaleSource>,
    pub webrtc: Arc<dyn WebRtcProbe>,
}

impl Ports {
    /// The adapters for the local host.
    pub fn system() -> Result<Self, ProbeError> {
        let repo = Arc::new(SystemRepo);
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new()?),
            interfaces: repo.clone(),
            connectivity: repo,
            locale: Arc::new(SystemLocale),
            webrtc: Arc::new(PathWebRtcProbe::from_env()),
        })
    }
}

enum BasicPart {
    Consistency(ConsistencyVerdict),
    DnsExposure(CheckResult<DnsExposure>),
    LocalAddresses(CheckResult<LocalAddresses>),
}

enum AdvancedPart {
    WebRtc(CheckResult<WebRtcStatus>),
    Geolocation(CheckResult<GeoRecord>),
    Time(CheckResult<TimeSnapshot>),
    VpnRange(CheckResult<VpnRangeVerdict>),
}

fn not_completed<T>(check: &str) -> CheckResult<T> {
    Err(ProbeError::Unknown(format!("{check} did not complete")))
}

pub struct Orchestrator {
    ports: Ports,
    config: Config,
    sink: Arc<dyn ReportSink>,
    session: Session,
}

impl Orchestrator {
    pub fn new(ports: Ports, config: Config, sink: Arc<dyn ReportSink>, session: Session) -> Self {
        Self {
            ports,
            config,
            sink,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connectivity, public IP, consistency, DNS exposure and local addresses.
    pub async fn run_basic_check(&self) -> Result<BasicReport, RunError> {
        info!("Starting basic check");
        self.log_network_context("Basic check");
        self.sink.loading(true);

        let result = tokio::select! {
            biased;
            _ = self.session.closed() => Err(RunError::Cancelled),
            report = self.basic_check() => Ok(report),
        };

        match &result {
            Ok(report) => {
                info!("Basic check finished");
                self.sink.basic_report(report);
                self.sink.notify(BASIC_COMPLETE_NOTICE);
            }
            Err(e) => {
                warn!("Basic check aborted: {e}");
                self.sink.run_failed(e);
            }
        }
        self.sink.loading(false);
        result
    }

    /// WebRTC capability, geolocation, time and locale, VPN range.
    pub async fn run_advanced_check(&self) -> Result<AdvancedReport, RunError> {
        info!("Starting advanced check");
        self.log_network_context("Advanced check");
        self.sink.loading(true);

        let result = tokio::select! {
            biased;
            _ = self.session.closed() => Err(RunError::Cancelled),
            report = self.advanced_check() => Ok(report),
        };

        match &result {
            Ok(report) => {
                info!("Advanced check finished");
                self.sink.advanced_report(report);
                self.sink.notify(ADVANCED_COMPLETE_NOTICE);
            }
            Err(e) => {
                warn!("Advanced check aborted: {e}");
                self.sink.run_failed(e);
            }
        }
        self.sink.loading(false);
        result
    }

    fn resolver(&self) -> PublicIpResolver {
        PublicIpResolver::new(Arc::clone(&self.ports.fetcher), self.config.canonical_target.clone())
    }

    async fn basic_check(&self) -> BasicReport {
        let connectivity = self.ports.connectivity.snapshot();

        let public_ip = self.resolver().resolve_public_ip().await;
        match &public_ip {
            Ok(ip) => info!("Public IP: {ip}"),
            Err(e) => warn!("Public IP lookup failed: {e}"),
        }
        let connectivity = connectivity.map(|mut snapshot| {
            snapshot.validated = public_ip.is_ok();
            snapshot
        });

        let mut tasks = JoinSet::new();

        let checker = ConsistencyChecker::new(Arc::clone(&self.ports.fetcher));
        let targets = self.config.consistency_targets.clone();
        tasks.spawn(async move { BasicPart::Consistency(checker.check_consistency(&targets).await) });

        let interfaces = Arc::clone(&self.ports.interfaces);
        let threshold = self.config.dns_leak_threshold;
        tasks.spawn_blocking(move || BasicPart::DnsExposure(check_dns_exposure(interfaces.as_ref(), threshold)));

        let interfaces = Arc::clone(&self.ports.interfaces);
        tasks.spawn_blocking(move || BasicPart::LocalAddresses(list_local_addresses(interfaces.as_ref())));

        let mut consistency = not_completed("consistency check");
        let mut dns_exposure = not_completed("DNS exposure check");
        let mut local_addresses = not_completed("local interface listing");

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(BasicPart::Consistency(verdict)) => consistency = Ok(verdict),
                Ok(BasicPart::DnsExposure(result)) => {
                    if let Err(e) = &result {
                        warn!("DNS exposure check failed: {e}");
                    }
                    dns_exposure = result;
                }
                Ok(BasicPart::LocalAddresses(result)) => {
                    if let Err(e) = &result {
                        warn!("Could not list local addresses: {e}");
                    }
                    local_addresses = result;
                }
                Err(e) => error!("Basic check task failed: {e}"),
            }
        }

        BasicReport {
            connectivity,
            public_ip,
            consistency,
            dns_exposure,
            local_addresses,
        }
    }

    async fn advanced_check(&self) -> AdvancedReport {
        let mut tasks = JoinSet::new();

        let webrtc = Arc::clone(&self.ports.webrtc);
        tasks.spawn_blocking(move || AdvancedPart::WebRtc(webrtc.probe()));

        let resolver = self.resolver();
        let locator = GeoLocator::new(
            Arc::clone(&self.ports.fetcher),
            self.config.geo_endpoint.clone(),
            self.config.geo_timeout,
        );
        tasks.spawn(async move {
            let record = match resolver.resolve_public_ip().await {
                Ok(ip) => locator.lookup_geo(&ip.to_string()).await,
                Err(e) => Err(e),
            };
            AdvancedPart::Geolocation(record)
        });

        let locale = Arc::clone(&self.ports.locale);
        tasks.spawn_blocking(move || AdvancedPart::Time(locale.snapshot()));

        let resolver = self.resolver();
        tasks.spawn(async move {
            let verdict = resolver
                .resolve_public_ip()
                .await
                .map(|ip| vpn_range_verdict(&ip.to_string()));
            AdvancedPart::VpnRange(verdict)
        });

        let mut webrtc = not_completed("WebRTC check");
        let mut geolocation = not_completed("geolocation lookup");
        let mut time = not_completed("time snapshot");
        let mut vpn_range = not_completed("VPN range check");

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(AdvancedPart::WebRtc(result)) => webrtc = result,
                Ok(AdvancedPart::Geolocation(result)) => {
                    if let Err(e) = &result {
                        warn!("Geolocation lookup failed: {e}");
                    }
                    geolocation = result;
                }
                Ok(AdvancedPart::Time(result)) => time = result,
                Ok(AdvancedPart::VpnRange(result)) => vpn_range = result,
                Err(e) => error!("Advanced check task failed: {e}"),
            }
        }

        AdvancedReport {
            webrtc,
            geolocation,
            time,
            vpn_range,
        }
    }

    fn log_network_context(&self, context: &str) {
        debug!("=== {context}: network context ===");
        match self.ports.connectivity.snapshot() {
            Ok(snapshot) => {
                debug!("VPN active: {}", snapshot.vpn_active);
                debug!("Internet: {}", snapshot.has_internet);
                debug!("Validated: {}", snapshot.validated);
                debug!("Transport: {}", snapshot.transport);
            }
            Err(e) => warn!("Could not read network information: {e}"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
