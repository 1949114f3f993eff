use crate::models::report::{AdvancedReport, BasicReport, RunError};

/// The presentation boundary. Only the orchestrator calls it.
pub trait ReportSink: Send + Sync {
    /// Called with `true` before a run starts and `false` once it ends, whatever the outcome.
    fn loading(&self, active: bool);
    fn basic_report(&self, report: &BasicReport);
    fn advanced_report(&self, report: &AdvancedReport);
    /// Short transient message, such as a completion notice.
    fn notify(&self, message: &str);
    fn run_failed(&self, error: &RunError);
}
