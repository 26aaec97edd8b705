// Rust guideline compliant 2026-02-06

//! Implementation of the `decal order` commands.

use crate::output::OutputFormatter;
use decal_app::{RepoContext, Result};
use decal_core::Order;

/// Creates a new order in the "New Order" status.
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `customer` - Customer display name
/// * `custom` - Explicit workflow choice; falls back to config when `None`
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the order cannot be saved.
pub fn create(
    repo: &RepoContext,
    customer: String,
    custom: Option<bool>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let customer = customer.trim().to_string();
    if customer.is_empty() {
        return Err(decal_app::AppError::InvalidInput(
            "Customer name cannot be empty".to_string(),
        ));
    }

    let is_custom_decal = match custom {
        Some(flag) => flag,
        None => repo.load_config()?.default_custom_decal,
    };

    let order = repo
        .open_backend()?
        .orders()
        .insert(&Order::new(customer, is_custom_decal))?;

    println!("{}", formatter.format_order(&order));
    Ok(())
}

/// Shows a single order.
///
/// # Errors
///
/// Returns an error if the order does not exist.
pub fn show(repo: &RepoContext, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let order = repo.open_backend()?.orders().load_by_id(id)?;
    println!("{}", formatter.format_order(&order));
    Ok(())
}

/// Lists all orders.
///
/// # Errors
///
/// Returns an error if the order store cannot be read.
pub fn list(repo: &RepoContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let orders = repo.open_backend()?.orders().load_all()?;
    println!("{}", formatter.format_orders(&orders));
    Ok(())
}
