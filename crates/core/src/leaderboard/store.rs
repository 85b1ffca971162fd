//! Append-only storage for finished matches.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::{error::StoreError, leaderboard::record::MatchRecord};

/// Append-only record set.
///
/// Appends must be atomic with respect to other writers of the same store and
/// `load_all` must see every completed append. Implementations never
/// deduplicate or rewrite rows.
pub trait RecordStore {
    fn append(&mut self, record: &MatchRecord) -> Result<(), StoreError>;

    /// Every stored row, in append order.
    fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn append(&mut self, record: &MatchRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        (**self).load_all()
    }
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Vec<MatchRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: &MatchRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.records.clone())
    }
}

// ============================================================================
// CSV file store
// ============================================================================

/// One row per match in a CSV file. The header is written by the first append
/// to a missing or empty file.
///
/// Rows carry a `matchId` column after the five match columns, so a file
/// written without it cannot be shared. Both `append` and `load_all` compare
/// the existing header against [`MatchRecord::COLUMNS`] and fail with
/// [`StoreError::HeaderMismatch`] rather than mixing layouts.
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn append(&mut self, record: &MatchRecord) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let fresh = file.metadata()?.len() == 0;
        if !fresh {
            check_columns(csv::Reader::from_path(&self.path)?.headers()?)?;
        }

        // The row (and header, if any) goes out in a single flush
        let mut writer = csv::WriterBuilder::new()
            .has_headers(fresh)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), match_id = %record.match_id, fresh, "appended record");

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?;
        if !headers.is_empty() {
            check_columns(headers)?;
        }

        let records = reader
            .deserialize::<MatchRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), StoreError> {
    if headers.iter().eq(MatchRecord::COLUMNS) {
        return Ok(());
    }

    Err(StoreError::HeaderMismatch(headers.iter().collect::<Vec<_>>().join(",")))
}
