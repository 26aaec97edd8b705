// Rust guideline compliant 2026-02-06

//! Implementation of the `decal init` command.

use decal_app::{RepoContext, Result};
use std::path::Path;

/// Creates the `.decal` directory with empty stores and default config.
///
/// Running it again on an initialized repository leaves existing data alone.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(root: Option<&Path>) -> Result<()> {
    let repo = RepoContext::init(root)?;
    println!("Initialized decal repository in {}", repo.decal_dir().display());
    Ok(())
}
