//! Time-off request list proxy
//!
//! The portal's Time Off page refreshes its request list after a
//! `timeoff-updated` event; this route forwards the gateway's list so the
//! page has one origin to talk to.

use application::ports::TimeOffRequestRecord;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Handle a request-list fetch
#[instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeOffRequestRecord>>, ApiError> {
    let records = state.timeoff.list_requests().await?;
    Ok(Json(records))
}
