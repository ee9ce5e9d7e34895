use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::{error::AppError, state::AppState};
use crate::api::{CmdResult, DELETED_MESSAGE};
use crate::model::{Confirmation, Flashcard, FlashcardDraft, FlashcardPatch};
use crate::store::DataStore;

pub const ADD_FAILED: &str = "Failed to add flashcard";
pub const LIST_FAILED: &str = "Failed to fetch flashcards";
pub const GET_FAILED: &str = "Failed to fetch flashcard";
pub const UPDATE_FAILED: &str = "Failed to update flashcard";
pub const DELETE_FAILED: &str = "Failed to delete flashcard";

type Shared<S> = State<Arc<AppState<S>>>;

fn single(result: CmdResult, failure: &'static str) -> Result<Flashcard, AppError> {
    result.into_affected().ok_or_else(|| AppError::Internal {
        message: failure,
        detail: "command returned no flashcard".to_string(),
    })
}

fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::MalformedPayload(rejection.body_text()))
}

fn log_messages(result: &CmdResult) {
    for message in &result.messages {
        info!("{}", message.content);
    }
}

pub async fn create_handler<S: DataStore + Send + 'static>(
    State(state): Shared<S>,
    body: Result<Json<FlashcardDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Flashcard>), AppError> {
    let draft = payload(body)?;
    let result = state
        .with_api(move |api| api.create_card(&draft))
        .await
        .map_err(|e| AppError::from_flashcard(e, ADD_FAILED))?;

    log_messages(&result);
    let card = single(result, ADD_FAILED)?;
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn list_handler<S: DataStore + Send + 'static>(
    State(state): Shared<S>,
) -> Result<Json<Vec<Flashcard>>, AppError> {
    let result = state
        .with_api(|api| api.list_cards())
        .await
        .map_err(|e| AppError::from_flashcard(e, LIST_FAILED))?;

    debug!(count = result.listed_cards.len(), "Listed flashcards");
    Ok(Json(result.listed_cards))
}

pub async fn get_handler<S: DataStore + Send + 'static>(
    State(state): Shared<S>,
    Path(id): Path<String>,
) -> Result<Json<Flashcard>, AppError> {
    let result = state
        .with_api(move |api| api.get_card(&id))
        .await
        .map_err(|e| AppError::from_flashcard(e, GET_FAILED))?;

    Ok(Json(single(result, GET_FAILED)?))
}

pub async fn update_handler<S: DataStore + Send + 'static>(
    State(state): Shared<S>,
    Path(id): Path<String>,
    body: Result<Json<FlashcardPatch>, JsonRejection>,
) -> Result<Json<Flashcard>, AppError> {
    // A bad id outranks a bad body
    let patch = payload(body);
    let result = state
        .with_api(move |api| {
            api.get_card(&id)?;
            match patch {
                Ok(patch) => api.update_card(&id, &patch).map(Ok),
                Err(rejected) => Ok(Err(rejected)),
            }
        })
        .await
        .map_err(|e| AppError::from_flashcard(e, UPDATE_FAILED))??;

    log_messages(&result);
    Ok(Json(single(result, UPDATE_FAILED)?))
}

pub async fn delete_handler<S: DataStore + Send + 'static>(
    State(state): Shared<S>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, AppError> {
    let result = state
        .with_api(move |api| api.delete_card(&id))
        .await
        .map_err(|e| AppError::from_flashcard(e, DELETE_FAILED))?;

    log_messages(&result);
    let message = result
        .messages
        .into_iter()
        .next()
        .map(|m| m.content)
        .unwrap_or_else(|| DELETED_MESSAGE.to_string());
    Ok(Json(Confirmation { message }))
}
