//! # Consistency Checking
//!
//! Queries several independent IP-echo services at the same time and compares their answers.
//! Each service has its own deadline, so one slow service never holds the others back, and a
//! failed service only lowers the responded count.

use std::sync::Arc;

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::probe::{ProbeOutcome, ProbeTarget};
use leakcheck_common::models::verdict::ConsistencyVerdict;
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::resolver::probe_target;

pub struct ConsistencyChecker {
    fetcher: Arc<dyn Fetcher>,
}

impl ConsistencyChecker {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Probes every target concurrently and waits for all of them.
    ///
    /// Outcomes come back in the order of `targets`. The call never fails: a target whose task
    /// died is recorded as an unknown error.
    pub async fn check_consistency(&self, targets: &[ProbeTarget]) -> ConsistencyVerdict {
        let mut tasks = JoinSet::new();

        for (index, target) in targets.iter().cloned().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            tasks.spawn(async move {
                let result = probe_target(fetcher.as_ref(), &target).await;
                (index, ProbeOutcome::from_result(target, result))
            });
        }

        let mut slots: Vec<Option<ProbeOutcome>> = vec![None; targets.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    match (outcome.value(), outcome.error()) {
                        (Some(ip), _) => debug!("{}: {ip}", outcome.target.service_name),
                        (None, Some(e)) => debug!("{} failed: {e}", outcome.target.service_name),
                        (None, None) => {}
                    }
                    slots[index] = Some(outcome);
                }
                Err(e) => error!("Consistency probe task failed: {e}"),
            }
        }

        let outcomes: Vec<ProbeOutcome> = slots
            .into_iter()
            .zip(targets)
            .map(|(slot, target)| {
                slot.unwrap_or_else(|| {
                    ProbeOutcome::failure(
                        target.clone(),
                        ProbeError::Unknown("probe task did not complete".to_string()),
                    )
                })
            })
            .collect();

        let verdict = ConsistencyVerdict::from_outcomes(outcomes);
        info!(
            "Consistency: {} distinct value(s) from {}/{} services ({})",
            verdict.distinct_value_count,
            verdict.responded_count,
            verdict.total_count,
            verdict.classification
        );
        verdict
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
