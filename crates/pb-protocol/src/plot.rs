use serde::{Deserialize, Serialize};

/// Sales status of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotStatus {
    Available,
    Sold,
    Hold,
}

impl PlotStatus {
    /// Uppercase rendering used in human-readable plot summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Sold => "SOLD",
            Self::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One plot in the sales registry, keyed by plot number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRecord {
    /// Plot number as printed on the site layout (e.g. "101").
    pub number: String,
    /// Current sales status.
    pub status: PlotStatus,
    /// Plot size in square feet.
    pub size_sqft: u32,
    /// All-inclusive price, kept as the formatted display string
    /// from the source table (e.g. "₹45,00,000").
    pub price: String,
}
