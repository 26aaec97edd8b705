// Rust guideline compliant 2026-02-09

//! Repository discovery and the file-backed order backend.

use crate::error::{AppError, Result};
use crate::ports::{OrderSource, OrderStatusSink, StageHistorySink, StageHistorySource};
use decal_core::{Config, HistoryStore, Order, OrderStageHistory, OrderStatus, OrderStore};
use std::path::{Path, PathBuf};

/// Name of the data directory inside a repository root.
pub const DECAL_DIR: &str = ".decal";

/// Repository path metadata for a decal workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    decal_dir: PathBuf,
    orders_path: PathBuf,
    history_path: PathBuf,
}

impl RepoContext {
    /// Discovers a repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository root cannot be resolved
    /// - The `.decal` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let context = Self::at(repo_root)?;
        if !context.decal_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.decal_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.decal` directory with empty stores and default config.
    ///
    /// Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(repo_root: Option<&Path>) -> Result<Self> {
        let context = Self::at(repo_root)?;
        std::fs::create_dir_all(&context.decal_dir)?;

        for path in [&context.orders_path, &context.history_path] {
            if !path.exists() {
                std::fs::File::create(path)?;
            }
        }

        if !context.config_path().exists() {
            Config::default().save(&context.decal_dir)?;
        }

        Ok(context)
    }

    fn at(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let decal_dir = root.join(DECAL_DIR);

        Ok(Self {
            root,
            orders_path: decal_dir.join("orders.jsonl"),
            history_path: decal_dir.join("stage_history.jsonl"),
            decal_dir,
        })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.decal` directory path.
    #[must_use]
    pub fn decal_dir(&self) -> &Path {
        self.decal_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.decal_dir.join("config.toml")
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.decal_dir())?)
    }

    /// Opens the file-backed backend for this repository.
    ///
    /// # Errors
    ///
    /// Returns an error if a store cannot be initialized.
    pub fn open_backend(&self) -> Result<FileBackend> {
        Ok(FileBackend {
            orders: OrderStore::new(self.orders_path.clone())?,
            history: HistoryStore::new(self.history_path.clone())?,
        })
    }
}

/// Order backend over the repository's JSONL stores.
#[derive(Debug, Clone)]
pub struct FileBackend {
    orders: OrderStore,
    history: HistoryStore,
}

impl FileBackend {
    /// Returns the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Returns the stage-history store.
    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}

impl OrderSource for FileBackend {
    fn find_order(&self, order_id: &str) -> Result<Order> {
        Ok(self.orders.load_by_id(order_id)?)
    }
}

impl StageHistorySource for FileBackend {
    fn stage_history(&self, order_id: &str) -> Result<Vec<OrderStageHistory>> {
        Ok(self.history.for_order(order_id)?)
    }
}

impl OrderStatusSink for FileBackend {
    fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        Ok(self.orders.update_status(order_id, status)?)
    }
}

impl StageHistorySink for FileBackend {
    fn record_stage(&self, record: &OrderStageHistory) -> Result<OrderStageHistory> {
        Ok(self.history.append(record)?)
    }
}
