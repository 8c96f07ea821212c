use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use mergington_core::{ActivityListing, MessageResponse};
use serde::Deserialize;

use crate::{errors::ServerResult, AppState};

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityListing> {
    Json(state.directory.list_activities())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ServerResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let message = state.directory.signup(&activity_name, &query.email)?;
    log_roster(&state, &activity_name, &query.email, "Signed up");

    Ok(Json(MessageResponse::new(message)))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ServerResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let message = state.directory.unregister(&activity_name, &query.email)?;
    log_roster(&state, &activity_name, &query.email, "Unregistered");

    Ok(Json(MessageResponse::new(message)))
}

fn log_roster(state: &AppState, activity_name: &str, email: &str, action: &str) {
    match state.directory.get_activity(activity_name) {
        Ok(activity) => tracing::info!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            spots_left = activity.spots_left(),
            "{}",
            action
        ),
        Err(e) => tracing::warn!(activity = activity_name, email, %e, "{}", action),
    }
}
