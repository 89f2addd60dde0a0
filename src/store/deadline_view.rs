use crate::store::Dataset;
use anyhow::Result;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Stable sort by deadline; listings without a usable date end up last
    pub fn sort_by_deadline(&mut self) {
        self.records.sort_by_key(|record| record.deadline.sort_key());
    }
}

/// Fold the primary listings into `view` and re-sort it.
///
/// Listings already in the view keep their row; unseen ones are appended in
/// primary order before sorting.
pub fn merge_into_view(primary: &Dataset, view: &mut Dataset) -> usize {
    let added = view.extend_unseen(primary.records().iter().cloned());
    view.sort_by_deadline();
    added
}

/// Load, merge, sort and rewrite the deadline view file
pub fn update(primary: &Dataset, path: &Path) -> Result<Dataset> {
    let mut view = Dataset::load(path)?;
    let added = merge_into_view(primary, &mut view);
    view.persist(path)?;

    info!(
        "Deadline view: {} added, {} total in {}",
        added,
        view.len(),
        path.display()
    );

    Ok(view)
}
