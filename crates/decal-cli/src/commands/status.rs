// Rust guideline compliant 2026-02-06

//! Implementation of the `decal check`, `decal next` and `decal set-status`
//! commands.

use crate::output::OutputFormatter;
use decal_app::{parse_role, resolve_status_label, RepoContext, Result, StatusService};

/// Checks a status change without applying it.
///
/// # Returns
///
/// `Ok(true)` if the change is permitted, `Ok(false)` if it was denied.
///
/// # Errors
///
/// Returns an error if the role is unknown or the order cannot be loaded.
pub fn check(
    repo: &RepoContext,
    order_id: &str,
    status: &str,
    role: &str,
    formatter: &dyn OutputFormatter,
) -> Result<bool> {
    let role = parse_role(role)?;
    let label = resolve_status_label(status);
    let service = StatusService::new(repo.open_backend()?);

    match service.check(order_id, &label, role) {
        Ok(()) => {
            println!("{}", formatter.format_check(order_id, &label, None));
            Ok(true)
        }
        Err(err) => match err.as_denial() {
            Some(denial) => {
                let reason = denial.to_string();
                println!("{}", formatter.format_check(order_id, &label, Some(&reason)));
                Ok(false)
            }
            None => Err(err),
        },
    }
}

/// Lists the statuses a role may choose for an order, current first.
///
/// # Errors
///
/// Returns an error if the role is unknown or the order cannot be loaded.
pub fn next(
    repo: &RepoContext,
    order_id: &str,
    role: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let role = parse_role(role)?;
    let service = StatusService::new(repo.open_backend()?);
    let statuses = service.available(order_id, role)?;

    println!("{}", formatter.format_statuses(order_id, &statuses));
    Ok(())
}

/// Validates and applies a status change.
///
/// # Errors
///
/// Returns the denial, or an error if the order cannot be loaded or saved.
pub fn set_status(
    repo: &RepoContext,
    order_id: &str,
    status: &str,
    role: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let role = parse_role(role)?;
    let label = resolve_status_label(status);
    let service = StatusService::new(repo.open_backend()?);
    let order = service.change_status(order_id, &label, role)?;

    println!("{}", formatter.format_order(&order));
    Ok(())
}
