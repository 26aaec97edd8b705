// Rust guideline compliant 2026-02-06

//! Implementation of the `decal stage` commands.

use crate::output::OutputFormatter;
use decal_app::{parse_stage, RepoContext, Result, StatusService};

/// Records a completed stage for an order.
///
/// # Errors
///
/// Returns an error if the stage name is unknown, the order does not
/// exist, or the record cannot be written.
pub fn record(
    repo: &RepoContext,
    order_id: &str,
    stage: &str,
    note: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let stage = parse_stage(stage)?;
    let service = StatusService::new(repo.open_backend()?);
    service.record_stage(order_id, stage, note)?;

    println!("{}", formatter.format_history(&service.history(order_id)?));
    Ok(())
}

/// Lists the stage history of an order.
///
/// # Errors
///
/// Returns an error if the order does not exist or history cannot be read.
pub fn list(repo: &RepoContext, order_id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = StatusService::new(repo.open_backend()?);
    println!("{}", formatter.format_history(&service.history(order_id)?));
    Ok(())
}
