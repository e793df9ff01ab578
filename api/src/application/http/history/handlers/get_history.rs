use axum::extract::State;
use nutrimatch_core::domain::history::{entities::HistorySnapshot, ports::HistoryService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    summary = "Most recent scans",
    description = "Returns the latest scans, oldest first, and the number of scans retained in memory.",
    responses(
        (status = 200, body = HistorySnapshot)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<HistorySnapshot>, ApiError> {
    let snapshot = state.service.get_recent_history().await?;

    Ok(Response::OK(snapshot))
}
