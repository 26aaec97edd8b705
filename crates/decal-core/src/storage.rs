// Rust guideline compliant 2026-02-06

//! Storage module for JSONL file operations.
//!
//! Orders and stage-history records each live in their own JSONL file.
//! Reads stream line by line and skip malformed lines; writes replace the
//! whole file through a temp file and an atomic rename.

use crate::models::{Order, OrderStageHistory, OrderStatus};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A record that can be persisted in a [`JsonlStore`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Unique record identifier.
    fn id(&self) -> &str;

    /// Validates the record before it is written or after it is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is malformed.
    fn validate(&self) -> Result<()>;

    /// Regenerates the ID using `nonce`.
    fn assign_id(&mut self, nonce: u32);
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        Order::validate(self)
    }

    fn assign_id(&mut self, nonce: u32) {
        Order::assign_id(self, nonce);
    }
}

impl Record for OrderStageHistory {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        OrderStageHistory::validate(self)
    }

    fn assign_id(&mut self, nonce: u32) {
        OrderStageHistory::assign_id(self, nonce);
    }
}

/// JSONL-backed record store.
#[derive(Debug, Clone)]
pub struct JsonlStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

/// Store of order snapshots.
pub type OrderStore = JsonlStore<Order>;

/// Store of stage-history records.
pub type HistoryStore = JsonlStore<OrderStageHistory>;

impl<T: Record> JsonlStore<T> {
    /// Creates a store for the JSONL file at `path`.
    ///
    /// The file does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _record: PhantomData,
        })
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records, one JSON object per line.
    ///
    /// A missing file yields an empty list. Malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a record fails
    /// validation.
    pub fn load_all(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<T>(&line) {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        error = %e,
                        "skipping malformed JSON line"
                    );
                }
            }
        }

        Ok(records)
    }

    /// Loads a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has the ID.
    pub fn load_by_id(&self, id: &str) -> Result<T> {
        self.load_all()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Inserts or replaces a record by ID.
    ///
    /// Use [`Self::insert`] for new records so an ID clash cannot overwrite
    /// an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the file cannot be
    /// written.
    pub fn save(&self, record: &T) -> Result<()> {
        record.validate()?;
        self.with_lock(|| {
            let mut records = self.load_all()?;
            match records.iter().position(|r| r.id() == record.id()) {
                Some(pos) => records[pos] = record.clone(),
                None => records.push(record.clone()),
            }
            self.save_all(&records)
        })
    }

    /// Adds a new record, re-deriving its ID until it is unique.
    ///
    /// The uniqueness check and the write happen under the store lock.
    ///
    /// # Returns
    ///
    /// The record as stored, possibly with a different ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the file cannot be
    /// written.
    pub fn insert(&self, record: &T) -> Result<T> {
        record.validate()?;
        self.with_lock(|| {
            let mut records = self.load_all()?;
            let mut stored = record.clone();
            let mut nonce = 0u32;
            while records.iter().any(|r| r.id() == stored.id()) {
                nonce = nonce.saturating_add(1);
                stored.assign_id(nonce);
            }

            records.push(stored.clone());
            self.save_all(&records)?;
            Ok(stored)
        })
    }

    /// Replaces the file contents with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is invalid or the atomic write fails.
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        for record in records {
            record.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Executes `f` while holding an exclusive lock on the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or `f` fails.
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

impl JsonlStore<Order> {
    /// Sets an order's status label and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the order does not exist.
    pub fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        self.with_lock(|| {
            let mut orders = self.load_all()?;
            let order = orders
                .iter_mut()
                .find(|order| order.id == order_id)
                .ok_or_else(|| Error::NotFound(order_id.to_string()))?;

            order.order_status = status.label().to_string();
            order.updated_at = chrono::Utc::now().timestamp();
            let updated = order.clone();

            self.save_all(&orders)?;
            Ok(updated)
        })
    }
}

impl JsonlStore<OrderStageHistory> {
    /// Loads the history records of one order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn for_order(&self, order_id: &str) -> Result<Vec<OrderStageHistory>> {
        let mut records: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|record| record.order_id == order_id)
            .collect();
        records.sort_by_key(|record| record.completed_at);
        Ok(records)
    }

    /// Appends a history record under a unique ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the file cannot be
    /// written.
    pub fn append(&self, record: &OrderStageHistory) -> Result<OrderStageHistory> {
        self.insert(record)
    }
}
