//! Answer lookup endpoint.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use pb_knowledge::FALLBACK_ANSWER;
use pb_protocol::AnswerReply;

use crate::state::AppState;

/// Query parameters for GET /api/v1/answer.
#[derive(Debug, Deserialize)]
pub struct AnswerParams {
    pub question: String,
}

/// GET /api/v1/answer?question=... — exact-match answer lookup.
///
/// Unknown questions still answer 200, carrying the fixed fallback text.
pub async fn get_answer(
    State(state): State<AppState>,
    Query(params): Query<AnswerParams>,
) -> Json<AnswerReply> {
    let answer = state
        .knowledge
        .answer(&params.question)
        .unwrap_or(FALLBACK_ANSWER)
        .to_string();
    Json(AnswerReply {
        question: params.question,
        answer,
    })
}
