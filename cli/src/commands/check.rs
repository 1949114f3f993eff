use leakcheck_core::orchestrator::Orchestrator;

use crate::commands::Commands;
use crate::terminal::print;

/// Runs the selected checks in order. A cancelled run stops the sequence.
pub async fn run(command: Commands, orchestrator: &Orchestrator) -> anyhow::Result<()> {
    let quiet = orchestrator.config().quiet;

    if matches!(command, Commands::Basic | Commands::All) {
        print::header("basic check", quiet);
        orchestrator.run_basic_check().await?;
    }
    if matches!(command, Commands::Advanced | Commands::All) {
        print::header("advanced tests", quiet);
        orchestrator.run_advanced_check().await?;
    }
    Ok(())
}
