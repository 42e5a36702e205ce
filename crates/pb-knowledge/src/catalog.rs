//! CSV readers for the Q&A catalog and the plot table.
//!
//! Both readers validate the header row up front so a misnamed column
//! surfaces as a single clear error rather than one failure per record.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use pb_protocol::{PlotRecord, QaRecord};

use crate::error::{CatalogError, CatalogResult};

/// Columns the Q&A catalog must carry, in any order.
pub const QA_COLUMNS: [&str; 3] = ["subject", "question", "answer"];

/// Columns the plot table must carry, in any order.
pub const PLOT_COLUMNS: [&str; 4] = ["number", "status", "size_sqft", "price"];

/// Read Q&A rows from a CSV file on disk.
pub fn read_qa_file(path: impl AsRef<Path>) -> CatalogResult<Vec<QaRecord>> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
    read_qa(file)
}

/// Read Q&A rows from any CSV reader with a header row.
pub fn read_qa(reader: impl Read) -> CatalogResult<Vec<QaRecord>> {
    let rows = read_records(reader, &QA_COLUMNS)?;
    tracing::debug!(rows = rows.len(), "qa catalog read");
    Ok(rows)
}

/// Read plot rows from a CSV file on disk.
pub fn read_plots_file(path: impl AsRef<Path>) -> CatalogResult<Vec<PlotRecord>> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
    read_plots(file)
}

/// Read plot rows from any CSV reader with a header row.
pub fn read_plots(reader: impl Read) -> CatalogResult<Vec<PlotRecord>> {
    let rows = read_records(reader, &PLOT_COLUMNS)?;
    tracing::debug!(rows = rows.len(), "plot table read");
    Ok(rows)
}

fn read_records<T: DeserializeOwned>(
    reader: impl Read,
    required: &[&str],
) -> CatalogResult<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| CatalogError::Parse {
            record: 0,
            message: e.to_string(),
        })?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(CatalogError::MissingColumn((*column).to_string()));
        }
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<T>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse {
            record: i + 1,
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
