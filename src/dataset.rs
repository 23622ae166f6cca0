//! The dataset loaded at startup and the state of that load.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::watch;

use crate::{
    Error,
    aggregation::max_amount,
    csv::parse_csv,
    grouping::{YearGroup, group_by_year},
    record::Record,
};

/// Every record of the input file, and the same records grouped by year.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    years: Vec<YearGroup>,
    max_amount: u64,
}

impl Dataset {
    /// Create a dataset from parsed records.
    ///
    /// Returns [Error::EmptyDataset] if there are no records.
    pub fn new(records: Vec<Record>) -> Result<Self, Error> {
        let max_amount = max_amount(&records)?;
        let years = group_by_year(&records);

        Ok(Self {
            records,
            years,
            max_amount,
        })
    }

    /// Parse CSV text into a dataset, see [parse_csv].
    pub fn from_csv(text: &str) -> Result<Self, Error> {
        Self::new(parse_csv(text)?)
    }

    /// All records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The year groups, in the order the years first appear.
    pub fn year_groups(&self) -> &[YearGroup] {
        &self.years
    }

    /// The years in the dataset, in the order they first appear.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().map(|year| year.key).collect()
    }

    /// The records of `year`, or `None` if there are none.
    pub fn year(&self, year: i32) -> Option<&YearGroup> {
        self.years.iter().find(|group| group.key == year)
    }

    /// The largest single-day amount across all years.
    pub fn max_amount(&self) -> u64 {
        self.max_amount
    }
}

/// Read and parse the dataset at `path`.
///
/// Returns [Error::LoadFailed] if the file cannot be read. Parse errors are
/// returned unchanged and no partial dataset is kept.
pub async fn load_dataset(path: &Path) -> Result<Dataset, Error> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| Error::LoadFailed(format!("{}: {error}", path.display())))?;

    let dataset = Dataset::from_csv(&text)?;

    tracing::info!(
        "Loaded {} records spanning {} years from {}",
        dataset.records().len(),
        dataset.year_groups().len(),
        path.display()
    );

    Ok(dataset)
}

/// The progress of the dataset load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The file is being read and parsed.
    Loading,
    /// The dataset is available.
    Ready(Arc<Dataset>),
    /// The load failed and will not be retried.
    Failed(Error),
}

impl LoadState {
    /// Whether the load has not finished yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Start loading the dataset at `path` in the background.
///
/// The returned receiver starts in [LoadState::Loading] and changes exactly
/// once, to [LoadState::Ready] or [LoadState::Failed].
///
/// Must be called from within a Tokio runtime.
pub fn spawn_load(path: PathBuf) -> watch::Receiver<LoadState> {
    let (sender, receiver) = watch::channel(LoadState::Loading);

    tokio::spawn(async move {
        let state = match load_dataset(&path).await {
            Ok(dataset) => LoadState::Ready(Arc::new(dataset)),
            Err(error) => {
                tracing::error!("Could not load dataset: {error}");
                LoadState::Failed(error)
            }
        };

        // Nobody is waiting for the result if every receiver has been dropped.
        let _ = sender.send(state);
    });

    receiver
}

/// Wait until the load started by [spawn_load] has finished.
pub async fn wait_for_dataset(
    mut receiver: watch::Receiver<LoadState>,
) -> Result<Arc<Dataset>, Error> {
    let state = receiver
        .wait_for(|state| !state.is_loading())
        .await
        .map_err(|_| Error::LoadFailed("the load task stopped without a result".to_owned()))?
        .clone();

    match state {
        LoadState::Ready(dataset) => Ok(dataset),
        LoadState::Failed(error) => Err(error),
        LoadState::Loading => Err(Error::LoadFailed(
            "the load task stopped without a result".to_owned(),
        )),
    }
}
