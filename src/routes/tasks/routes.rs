use axum::{Json, extract::{State, Path}, http::StatusCode, response::IntoResponse};
use tracing::error;
use crate::state::AppState;
use super::dto::{TaskCreated, TaskPayload};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<TaskPayload>,
) -> impl IntoResponse {
    match state.store.create(&body).await {
        Ok(()) => {
            let created = TaskCreated {
                message: "Task created successfully".to_string(),
                task: body,
            };
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Error creating task: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => {
            error!("Error getting tasks: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id).await {
        Ok(Some(task)) => (StatusCode::OK, Json(task)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("Error getting task: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TaskPayload>,
) -> impl IntoResponse {
    match state.store.update(&id, &body).await {
        // Zero matched rows is the only signal that the id is unknown.
        Ok(0) => StatusCode::NOT_FOUND.into_response(),
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("Error updating task: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&id).await {
        Ok(0) => StatusCode::NOT_FOUND.into_response(),
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("Error deleting task: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
