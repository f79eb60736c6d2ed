//! Event CRUD and search endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use agenda_core::{AgendaError, Event, EventDraft};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/search", get(search_events))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// GET /events - All events, ordered by date then start time
async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.store.all())
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// GET /events/search?q=... - Substring search over title and description
async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Event>> {
    Json(state.store.search(&params.q))
}

/// GET /events/:id - Point lookup
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Event>, ApiError> {
    state
        .store
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Event not found: {id}")))
}

/// POST /events - Create an event unless it conflicts with an existing one
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    validate(&draft)?;
    if state.store.overlaps(&draft, None) {
        return Err(ApiError::bad_request(
            "Event overlaps an existing event on the same day",
        ));
    }

    let id = state.store.insert(draft.clone());
    tracing::info!(id, title = %draft.title, "created event");
    Ok((StatusCode::CREATED, Json(draft.into_event(id))))
}

/// PUT /events/:id - Replace all fields of an event, keeping its id.
///
/// Existence is checked before the overlap check, so a missing target is
/// reported as 404 even when the payload would also conflict.
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, ApiError> {
    validate(&draft)?;
    if state.store.get(id).is_none() {
        return Err(ApiError::not_found(format!("Event not found: {id}")));
    }
    if state.store.overlaps(&draft, Some(id)) {
        return Err(ApiError::bad_request(
            "Event overlaps an existing event on the same day",
        ));
    }
    if !state.store.update(id, draft.clone()) {
        // Deleted between the existence check and the write
        return Err(ApiError::not_found(format!("Event not found: {id}")));
    }

    tracing::info!(id, "updated event");
    Ok(Json(draft.into_event(id)))
}

/// DELETE /events/:id
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    if state.store.remove(id) {
        tracing::info!(id, "deleted event");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Event not found: {id}")))
    }
}

/// Boundary validation; the store itself accepts any draft.
fn validate(draft: &EventDraft) -> Result<(), AgendaError> {
    if draft.title.trim().is_empty() {
        return Err(AgendaError::InvalidInput(
            "title must not be blank".to_string(),
        ));
    }
    Ok(())
}
