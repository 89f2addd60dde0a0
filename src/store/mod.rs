pub mod deadline_view;

use crate::models::{ListingKey, ListingRecord};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Header row shared by both dataset files
pub const COLUMNS: [&str; 6] = [
    "Post",
    "Company",
    "Experience",
    "Level",
    "Salary",
    "Deadline",
];

/// Ordered listings, unique by (title, company, deadline)
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ListingRecord>,
    keys: HashSet<ListingKey>,
}

impl Dataset {
    /// Build a dataset, keeping the first occurrence of every key
    pub fn from_records(records: impl IntoIterator<Item = ListingRecord>) -> Self {
        let mut dataset = Self::default();
        dataset.extend_unseen(records);
        dataset
    }

    /// Read a dataset file. A file that does not exist yet is an empty dataset.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("{} not found, starting empty", path.display());
            return Ok(Self::default());
        }

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<ListingRecord>() {
            let record = row.with_context(|| format!("Malformed row in {}", path.display()))?;
            records.push(record);
        }

        let total = records.len();
        let dataset = Self::from_records(records);
        if dataset.len() < total {
            warn!(
                "Dropped {} duplicate rows from {}",
                total - dataset.len(),
                path.display()
            );
        }
        debug!("Loaded {} records from {}", dataset.len(), path.display());

        Ok(dataset)
    }

    /// Put unseen records in front of the existing ones, keeping fetch order.
    /// Returns how many were inserted.
    pub fn merge_new(&mut self, fresh: impl IntoIterator<Item = ListingRecord>) -> usize {
        let mut merged: Vec<ListingRecord> = fresh
            .into_iter()
            .filter(|record| self.keys.insert(record.key()))
            .collect();

        let added = merged.len();
        merged.append(&mut self.records);
        self.records = merged;
        added
    }

    /// Append unseen records after the existing ones. Returns how many were
    /// inserted.
    pub fn extend_unseen(&mut self, records: impl IntoIterator<Item = ListingRecord>) -> usize {
        let before = self.records.len();
        for record in records {
            if self.keys.insert(record.key()) {
                self.records.push(record);
            }
        }
        self.records.len() - before
    }

    /// Rewrite the whole file: header plus every record.
    ///
    /// Rows go to a temporary file in the target directory which then replaces
    /// the target, so an interrupted run leaves the previous file intact.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer.write_record(COLUMNS)?;
            for record in &self.records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        debug!("Wrote {} records to {}", self.records.len(), path.display());

        Ok(())
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
