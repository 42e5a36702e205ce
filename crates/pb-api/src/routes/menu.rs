//! Menu endpoints: subject list and per-subject questions.

use axum::Json;
use axum::extract::{Path, State};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/menu — ordered list of subjects (the main menu).
pub async fn list_subjects(State(state): State<AppState>) -> Json<Vec<String>> {
    let subjects = state
        .knowledge
        .subjects()
        .into_iter()
        .map(String::from)
        .collect();
    Json(subjects)
}

/// GET /api/v1/subjects/{subject}/questions — ordered questions for one
/// subject.
pub async fn list_questions(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    state
        .knowledge
        .questions(&subject)
        .map(|qs| Json(qs.into_iter().map(String::from).collect()))
        .ok_or_else(|| ApiError::NotFound(format!("subject '{subject}' not found")))
}
