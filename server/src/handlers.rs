//! Axum handlers for the todo routes.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    Form, Json,
};
use serde::{Deserialize, Serialize};
use todo_store::{parse_id, parse_status, StoreError, TodoItem};

use crate::error::{ApiError, StatusMessage};
use crate::SharedStore;

/// Fields for `POST /todos`, read from the body or the URL query. A missing
/// `title` creates an untitled item.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    pub title: Option<String>,
}

/// Fields for `PUT|PATCH /todos/{id}`, read from the body or the URL query.
/// `status` is validated by `parse_status`, so a missing field is reported
/// as 406.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateForm {
    pub status: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub backend: String,
}

/// Resolve one form field: a value in the body wins over one in the query.
///
/// An unreadable body is only an error when the query does not supply the
/// field either. Rejections become `InvalidArgument` so the client still gets
/// a JSON 406.
fn form_field(
    body: Result<Option<String>, FormRejection>,
    query: Result<Option<String>, QueryRejection>,
) -> Result<Option<String>, ApiError> {
    let query = query.map_err(|rejection| invalid(rejection.body_text()))?;
    match body {
        Ok(Some(value)) => Ok(Some(value)),
        Ok(None) => Ok(query),
        Err(rejection) => match query {
            Some(value) => Ok(Some(value)),
            None => Err(invalid(rejection.body_text())),
        },
    }
}

fn invalid(message: String) -> ApiError {
    ApiError(StoreError::InvalidArgument(message))
}

pub async fn health(State(store): State<SharedStore>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        backend: store.name().to_string(),
    })
}

pub async fn list_completed(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(store.list_completed().await?))
}

pub async fn list_incomplete(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(store.list_incomplete().await?))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    query: Result<Query<CreateForm>, QueryRejection>,
    body: Result<Form<CreateForm>, FormRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let title = form_field(
        body.map(|Form(input)| input.title),
        query.map(|Query(input)| input.title),
    )?
    .unwrap_or_default();
    Ok(Json(store.create(&title).await?))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    query: Result<Query<UpdateForm>, QueryRejection>,
    body: Result<Form<UpdateForm>, FormRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id)?;
    let status = form_field(
        body.map(|Form(input)| input.status),
        query.map(|Query(input)| input.status),
    )?
    .unwrap_or_default();
    let completed = parse_status(&status)?;
    Ok(Json(store.update_status(id, completed).await?))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    let id = parse_id(&id)?;
    store.delete(id).await?;
    Ok(Json(StatusMessage::success()))
}
