//! Voice API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/voice/transcript | POST | order from a recognised transcript |

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_TRANSCRIPT_LEN, validate_request};
use crate::voice::{self, TranscriptOutcome};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/voice/transcript", post(transcript))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TranscriptRequest {
    #[validate(length(max = MAX_TRANSCRIPT_LEN))]
    pub transcript: String,
}

async fn transcript(
    State(state): State<ServerState>,
    Json(payload): Json<TranscriptRequest>,
) -> AppResult<Json<TranscriptOutcome>> {
    validate_request(&payload)?;
    Ok(Json(
        voice::handle_transcript(&state.shop, &payload.transcript).await?,
    ))
}
