use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;

use crate::models::probe::ProbeOutcome;

/// How well a set of IP-echo services agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    AllFailed,
    Consistent,
    MinorInconsistency,
    Inconsistent,
}

impl Classification {
    /// Maps a count of distinct returned addresses to a classification.
    ///
    /// The cut points are fixed: 0, 1, 2, and anything above 2.
    pub fn from_distinct_count(distinct: usize) -> Self {
        match distinct {
            0 => Classification::AllFailed,
            1 => Classification::Consistent,
            2 => Classification::MinorInconsistency,
            _ => Classification::Inconsistent,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Classification::AllFailed => "All failed",
            Classification::Consistent => "Consistent",
            Classification::MinorInconsistency => "Minor inconsistency",
            Classification::Inconsistent => "Inconsistent",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyVerdict {
    pub distinct_value_count: usize,
    pub responded_count: usize,
    pub total_count: usize,
    pub classification: Classification,
    pub outcomes: Vec<ProbeOutcome>,
}

impl ConsistencyVerdict {
    /// Folds a finished set of outcomes into a verdict.
    pub fn from_outcomes(outcomes: Vec<ProbeOutcome>) -> Self {
        let distinct: BTreeSet<Ipv4Addr> = outcomes.iter().filter_map(ProbeOutcome::value).collect();
        let responded_count = outcomes.iter().filter(|o| o.succeeded()).count();

        Self {
            distinct_value_count: distinct.len(),
            responded_count,
            total_count: outcomes.len(),
            classification: Classification::from_distinct_count(distinct.len()),
            outcomes,
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
