//! Plot lookup endpoint.

use axum::Json;
use axum::extract::{Path, State};

use pb_protocol::PlotRecord;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/plots/{number} — status/size/price for one plot.
pub async fn get_plot(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> ApiResult<Json<PlotRecord>> {
    state
        .plots
        .lookup(&number)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("plot '{number}' not found")))
}
