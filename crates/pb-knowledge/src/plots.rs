//! Plot registry: status/size/price lookup keyed by plot number.

use std::collections::HashMap;
use std::path::Path;

use pb_protocol::{PlotRecord, PlotStatus};

use crate::catalog::read_plots_file;
use crate::error::CatalogResult;

/// In-memory plot table keyed by plot number.
#[derive(Debug, Clone, Default)]
pub struct PlotRegistry {
    plots: HashMap<String, PlotRecord>,
}

impl PlotRegistry {
    /// A registry with no plots.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from plot rows. Later rows with the same number
    /// replace earlier ones.
    pub fn from_records(rows: Vec<PlotRecord>) -> Self {
        let plots = rows
            .into_iter()
            .map(|p| (p.number.clone(), p))
            .collect::<HashMap<_, _>>();
        tracing::debug!(plots = plots.len(), "plot registry built");
        Self { plots }
    }

    /// Load a registry from a plot-table CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Ok(Self::from_records(read_plots_file(path)?))
    }

    /// Look up a plot by number. Input is trimmed; matching is otherwise
    /// exact.
    pub fn lookup(&self, number: &str) -> Option<&PlotRecord> {
        self.plots.get(number.trim())
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Built-in plot table matching the original sales dataset.
    pub fn with_sample_plots() -> Self {
        let rows = [
            ("101", PlotStatus::Sold, 1200, "₹45,00,000"),
            ("105", PlotStatus::Available, 1500, "₹56,00,000"),
            ("115", PlotStatus::Hold, 900, "₹34,00,000"),
            ("200", PlotStatus::Available, 1800, "₹65,00,000"),
        ];
        Self::from_records(
            rows.into_iter()
                .map(|(number, status, size_sqft, price)| PlotRecord {
                    number: number.into(),
                    status,
                    size_sqft,
                    price: price.into(),
                })
                .collect(),
        )
    }
}

/// Human-readable summary of a plot record.
pub fn plot_details(plot: &PlotRecord) -> String {
    format!(
        "Details for plot {}: status {}, size {} sq. ft., price (all-inclusive) {}.",
        plot.number, plot.status, plot.size_sqft, plot.price
    )
}

/// Deterministic reply for a plot number with no registry entry.
pub fn plot_not_found(number: &str) -> String {
    format!("Plot {number} not found. Please check your plot number and try again.")
}
