//! Stub ports shared by the integration tests.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use leakcheck_common::config::Config;
use leakcheck_common::error::ProbeError;
use leakcheck_common::models::interface::InterfaceAddress;
use leakcheck_common::models::report::{AdvancedReport, BasicReport, RunError};
use leakcheck_common::models::system::{ConnectivitySnapshot, TimeSnapshot, Transport, WebRtcStatus};
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use leakcheck_common::ports::outbound::system_repository::{
    ConnectivityProvider, InterfaceSource, LocaleSource, WebRtcProbe,
};
use leakcheck_common::ports::outbound::ui::ReportSink;
use leakcheck_core::orchestrator::Ports;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Clone)]
pub enum Reply {
    Body(String),
    Fail(ProbeError),
    Hang,
}

/// Answers by URL prefix and records every requested URL.
pub struct StubFetcher {
    replies: Vec<(String, Reply)>,
    fallback: Reply,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    /// Every URL without a scripted reply gets `fallback`.
    pub fn new(fallback: Reply) -> Self {
        Self {
            replies: Vec::new(),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, url_prefix: &str, reply: Reply) -> Self {
        self.replies.push((url_prefix.to_string(), reply));
        self
    }

    pub fn body(self, url_prefix: &str, body: &str) -> Self {
        self.reply(url_prefix, Reply::Body(body.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, ProbeError> {
        lock(&self.calls).push(url.to_string());

        let reply = self
            .replies
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Fail(err) => Err(err),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// A host with a fixed interface table, network and locale.
pub struct StaticHost {
    pub addresses: Vec<InterfaceAddress>,
    pub connectivity: Result<ConnectivitySnapshot, ProbeError>,
    pub time: Result<TimeSnapshot, ProbeError>,
    pub webrtc: Result<WebRtcStatus, ProbeError>,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            addresses: vec![
                InterfaceAddress::new("lo", "127.0.0.1", true, true),
                InterfaceAddress::new("eth0", "192.168.1.20", false, true),
                InterfaceAddress::new("eth0", "fe80::1", false, true),
                InterfaceAddress::new("tun0", "10.8.0.6", false, true),
            ],
            connectivity: Ok(ConnectivitySnapshot {
                vpn_active: true,
                transport: Transport::Ethernet,
                has_internet: true,
                validated: false,
                unmetered: true,
            }),
            time: Ok(TimeSnapshot {
                timezone_id: "America/Sao_Paulo".to_string(),
                time: "09:05:07".to_string(),
                date: "14/10/2026".to_string(),
                language: "pt".to_string(),
                country: "BR".to_string(),
                utc_offset_hours: -3,
            }),
            webrtc: Ok(WebRtcStatus {
                available: true,
                detected: vec!["firefox".to_string()],
            }),
        }
    }
}

impl InterfaceSource for StaticHost {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, ProbeError> {
        Ok(self.addresses.clone())
    }
}

impl ConnectivityProvider for StaticHost {
    fn snapshot(&self) -> Result<ConnectivitySnapshot, ProbeError> {
        self.connectivity.clone()
    }
}

impl LocaleSource for StaticHost {
    fn snapshot(&self) -> Result<TimeSnapshot, ProbeError> {
        self.time.clone()
    }
}

impl WebRtcProbe for StaticHost {
    fn probe(&self) -> Result<WebRtcStatus, ProbeError> {
        self.webrtc.clone()
    }
}

#[derive(Debug, Clone)]
pub enum SinkEvent {
    Loading(bool),
    Basic(BasicReport),
    Advanced(AdvancedReport),
    Notice(String),
    Failed(RunError),
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        lock(&self.events).clone()
    }

    /// Short names of the events, in order.
    pub fn trace(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|event| match event {
                SinkEvent::Loading(active) => format!("loading:{active}"),
                SinkEvent::Basic(_) => "basic".to_string(),
                SinkEvent::Advanced(_) => "advanced".to_string(),
                SinkEvent::Notice(message) => format!("notice:{message}"),
                SinkEvent::Failed(err) => format!("failed:{}", err.user_message()),
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn loading(&self, active: bool) {
        lock(&self.events).push(SinkEvent::Loading(active));
    }

    fn basic_report(&self, report: &BasicReport) {
        lock(&self.events).push(SinkEvent::Basic(report.clone()));
    }

    fn advanced_report(&self, report: &AdvancedReport) {
        lock(&self.events).push(SinkEvent::Advanced(report.clone()));
    }

    fn notify(&self, message: &str) {
        lock(&self.events).push(SinkEvent::Notice(message.to_string()));
    }

    fn run_failed(&self, error: &RunError) {
        lock(&self.events).push(SinkEvent::Failed(error.clone()));
    }
}

pub fn ports(fetcher: Arc<StubFetcher>, host: Arc<StaticHost>) -> Ports {
    Ports {
        fetcher,
        interfaces: host.clone(),
        connectivity: host.clone(),
        locale: host.clone(),
        webrtc: host,
    }
}

/// A config pointing the geo lookup at `http://geo.test/json/`.
pub fn test_config() -> Config {
    Config::default().with_geo_endpoint("http://geo.test/json/")
}
