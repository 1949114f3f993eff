#![cfg(test)]
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use leakcheck_common::config::Config;
use leakcheck_common::error::{ErrorKind, ProbeError};
use leakcheck_common::models::probe::ProbeTarget;
use leakcheck_common::models::report::RunError;
use leakcheck_common::models::verdict::Classification;
use leakcheck_core::orchestrator::{Orchestrator, Session};
use leakcheck_integration_tests::{ports, test_config, RecordingSink, Reply, StaticHost, StubFetcher};

const GEO_BODY: &str =
    r#"{"status":"success","country":"Brazil","countryCode":"BR","city":"Recife","isp":"Example Telecom"}"#;

fn orchestrator(
    fetcher: StubFetcher,
    host: StaticHost,
    cfg: Config,
) -> (Orchestrator, Arc<RecordingSink>, Arc<StubFetcher>) {
    let fetcher = Arc::new(fetcher);
    let sink = Arc::new(RecordingSink::default());
    let orchestrator = Orchestrator::new(
        ports(fetcher.clone(), Arc::new(host)),
        cfg,
        sink.clone(),
        Session::new(),
    );
    (orchestrator, sink, fetcher)
}

fn answering(ip: &str) -> StubFetcher {
    StubFetcher::new(Reply::Body(format!("{ip}\n"))).body("http://geo.test/", GEO_BODY)
}

/*************************************************************
                        Basic check
**************************************************************/

#[tokio::test]
async fn basic_check_reports_every_sub_check() {
    let (orchestrator, sink, _) = orchestrator(answering("203.0.113.7"), StaticHost::default(), test_config());

    let report = orchestrator.run_basic_check().await.unwrap();

    assert_eq!(report.public_ip, Ok(Ipv4Addr::new(203, 0, 113, 7)));
    let connectivity = report.connectivity.unwrap();
    assert!(connectivity.vpn_active);
    assert!(connectivity.validated);

    let verdict = report.consistency.unwrap();
    assert_eq!(verdict.classification, Classification::Consistent);
    assert_eq!((verdict.responded_count, verdict.total_count), (4, 4));

    let dns = report.dns_exposure.unwrap();
    assert_eq!(dns.addresses.len(), 2);
    assert!(!dns.likely_leak);

    let local = report.local_addresses.unwrap();
    assert_eq!(local.interface_count, 2);

    assert_eq!(
        sink.trace(),
        vec!["loading:true", "basic", "notice:Basic check complete!", "loading:false"]
    );
}

#[tokio::test]
async fn offline_host_still_gets_a_report() {
    let fetcher = StubFetcher::new(Reply::Fail(ProbeError::Unreachable("dns failure".into())));
    let (orchestrator, sink, _) = orchestrator(fetcher, StaticHost::default(), test_config());

    let report = orchestrator.run_basic_check().await.unwrap();

    assert_eq!(report.public_ip.unwrap_err().kind(), ErrorKind::Unreachable);
    assert!(!report.connectivity.unwrap().validated);
    assert_eq!(report.consistency.unwrap().classification, Classification::AllFailed);
    assert!(report.dns_exposure.is_ok());
    assert!(sink.trace().contains(&"notice:Basic check complete!".to_string()));
}

#[tokio::test]
async fn two_failed_services_of_four_stay_consistent() {
    let fetcher = StubFetcher::new(Reply::Body("203.0.113.7".into()))
        .reply("https://checkip.amazonaws.com", Reply::Fail(ProbeError::Timeout(5_000)))
        .body("https://ifconfig.me", "<html>rate limited</html>");
    let (orchestrator, _, _) = orchestrator(fetcher, StaticHost::default(), test_config());

    let verdict = orchestrator.run_basic_check().await.unwrap().consistency.unwrap();

    assert_eq!(verdict.distinct_value_count, 1);
    assert_eq!(verdict.responded_count, 2);
    assert_eq!(verdict.total_count, 4);
    assert_eq!(verdict.classification, Classification::Consistent);
}

#[tokio::test]
async fn disagreeing_services_are_flagged() {
    let fetcher = StubFetcher::new(Reply::Body("203.0.113.7".into()))
        .body("https://icanhazip.com", "198.51.100.2")
        .body("https://ifconfig.me", "192.0.2.44");
    let (orchestrator, _, _) = orchestrator(fetcher, StaticHost::default(), test_config());

    let verdict = orchestrator.run_basic_check().await.unwrap().consistency.unwrap();

    assert_eq!(verdict.distinct_value_count, 3);
    assert_eq!(verdict.classification, Classification::Inconsistent);
}

#[tokio::test]
async fn hanging_services_are_bounded_by_their_deadlines() {
    let mut cfg = test_config().with_consistency_timeout(100);
    cfg.canonical_target = ProbeTarget::new("IPify", "https://api.ipify.org", 100);
    let (orchestrator, _, _) = orchestrator(StubFetcher::new(Reply::Hang), StaticHost::default(), cfg);

    let started = Instant::now();
    let report = orchestrator.run_basic_check().await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(report.public_ip, Err(ProbeError::Timeout(100)));
    let verdict = report.consistency.unwrap();
    assert_eq!(verdict.classification, Classification::AllFailed);
    assert!(verdict.outcomes.iter().all(|o| o.error() == Some(&ProbeError::Timeout(100))));
}

#[tokio::test]
async fn many_exposed_addresses_are_a_likely_leak() {
    let mut host = StaticHost::default();
    host.addresses = (0..5)
        .map(|i| leakcheck_common::models::interface::InterfaceAddress::new(format!("eth{i}"), format!("10.0.{i}.2"), false, true))
        .collect();
    let (orchestrator, _, _) = orchestrator(answering("203.0.113.7"), host, test_config());

    let dns = orchestrator.run_basic_check().await.unwrap().dns_exposure.unwrap();

    assert_eq!(dns.addresses.len(), 5);
    assert!(dns.likely_leak);
}

#[tokio::test]
async fn connectivity_failure_does_not_hide_the_rest() {
    let host = StaticHost {
        connectivity: Err(ProbeError::PermissionDenied("netlink".into())),
        ..StaticHost::default()
    };
    let (orchestrator, _, _) = orchestrator(answering("203.0.113.7"), host, test_config());

    let report = orchestrator.run_basic_check().await.unwrap();

    assert_eq!(report.connectivity.unwrap_err().kind(), ErrorKind::PermissionDenied);
    assert!(report.public_ip.is_ok());
    assert!(report.consistency.is_ok());
}

/*************************************************************
                       Advanced check
**************************************************************/

#[tokio::test]
async fn advanced_check_chains_the_public_ip() {
    let (orchestrator, sink, fetcher) = orchestrator(answering("100.64.0.1"), StaticHost::default(), test_config());

    let report = orchestrator.run_advanced_check().await.unwrap();

    let geo = report.geolocation.unwrap();
    assert_eq!(geo.ip, "100.64.0.1");
    assert_eq!(geo.city, "Recife");
    assert_eq!(geo.country_code, "BR");

    let vpn_range = report.vpn_range.unwrap();
    assert_eq!(vpn_range.ip, "100.64.0.1");
    assert!(vpn_range.is_common_vpn_or_nat_range);

    assert!(report.webrtc.unwrap().available);
    assert_eq!(report.time.unwrap().utc_offset_hours, -3);

    assert!(fetcher.calls().contains(&"http://geo.test/json/100.64.0.1".to_string()));
    assert_eq!(
        sink.trace(),
        vec!["loading:true", "advanced", "notice:Advanced tests complete!", "loading:false"]
    );
}

#[tokio::test]
async fn public_address_is_not_in_a_vpn_range() {
    let (orchestrator, _, _) = orchestrator(answering("8.8.8.8"), StaticHost::default(), test_config());

    let report = orchestrator.run_advanced_check().await.unwrap();

    assert!(!report.vpn_range.unwrap().is_common_vpn_or_nat_range);
}

#[tokio::test]
async fn failed_resolution_only_fails_the_dependent_checks() {
    let fetcher = StubFetcher::new(Reply::Body("not-an-ip".into()));
    let (orchestrator, _, fetcher) = orchestrator(fetcher, StaticHost::default(), test_config());

    let report = orchestrator.run_advanced_check().await.unwrap();

    assert_eq!(report.geolocation.unwrap_err().kind(), ErrorKind::InvalidResponse);
    assert_eq!(report.vpn_range.unwrap_err().kind(), ErrorKind::InvalidResponse);
    assert!(report.webrtc.is_ok());
    assert!(report.time.is_ok());
    assert!(fetcher.calls().iter().all(|url| !url.starts_with("http://geo.test/")));
}

#[tokio::test]
async fn unparseable_geo_body_yields_empty_fields() {
    let fetcher = StubFetcher::new(Reply::Body("203.0.113.7".into())).body("http://geo.test/", "Service Unavailable");
    let (orchestrator, _, _) = orchestrator(fetcher, StaticHost::default(), test_config());

    let geo = orchestrator.run_advanced_check().await.unwrap().geolocation.unwrap();

    assert_eq!(geo.ip, "203.0.113.7");
    assert_eq!(geo.country, "");
    assert_eq!(geo.isp, "");
}

/*************************************************************
                        Cancellation
**************************************************************/

#[tokio::test]
async fn closing_the_session_cancels_a_run_in_flight() {
    let (orchestrator, sink, _) = orchestrator(StubFetcher::new(Reply::Hang), StaticHost::default(), test_config());

    let session = orchestrator.session().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.close();
    });

    let started = Instant::now();
    let result = orchestrator.run_basic_check().await;

    assert_eq!(result.unwrap_err(), RunError::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(sink.trace(), vec!["loading:true", "failed:Check cancelled", "loading:false"]);
}

#[tokio::test]
async fn closed_session_refuses_new_runs() {
    let (orchestrator, sink, fetcher) = orchestrator(answering("203.0.113.7"), StaticHost::default(), test_config());
    orchestrator.session().close();

    assert_eq!(orchestrator.run_advanced_check().await.unwrap_err(), RunError::Cancelled);
    assert!(fetcher.calls().is_empty());
    assert!(!sink.trace().contains(&"advanced".to_string()));
}
