//! People endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::extract::{AppJson, AppPath};
use crate::{
    error::{AppError, AppResult},
    models::PersonDto,
    validation::ensure_valid,
    AppState,
};

pub(crate) fn person_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Person with id = {} wasn't found!", id))
}

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "All people", body = Vec<PersonDto>)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<PersonDto>>> {
    tracing::info!("Getting all people");
    let people = state.services.people.find_all().await?;
    Ok(Json(
        people.iter().map(|p| state.converter.person_to_dto(p)).collect(),
    ))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = PersonDto),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<PersonDto>> {
    tracing::info!("Getting person by id = {}", id);
    let person = state
        .services
        .people
        .find_one(id)
        .await?
        .ok_or_else(|| person_not_found(id))?;
    Ok(Json(state.converter.person_to_dto(&person)))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = PersonDto,
    responses(
        (status = 200, description = "Person created"),
        (status = 400, description = "Invalid person", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(dto): AppJson<PersonDto>,
) -> AppResult<StatusCode> {
    ensure_valid(&dto)?;

    tracing::info!("Create new person {}", dto);
    // Creation always allocates a fresh id.
    let person = state.converter.dto_to_person(&PersonDto { id: 0, ..dto });
    let stored = state.services.people.save(&person).await?;
    tracing::info!("New person {} was successfully created", stored);

    Ok(StatusCode::OK)
}

/// Update a person, selected by the `id` in the body
#[utoipa::path(
    put,
    path = "/people",
    tag = "people",
    request_body = PersonDto,
    responses(
        (status = 200, description = "Person updated"),
        (status = 400, description = "Invalid person", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    AppJson(dto): AppJson<PersonDto>,
) -> AppResult<StatusCode> {
    ensure_valid(&dto)?;

    tracing::info!("Update person {}", dto);
    let person = state.converter.dto_to_person(&dto);
    let stored = state.services.people.update(dto.id, person).await?;
    tracing::info!("Person {} was successfully updated", stored);

    Ok(StatusCode::OK)
}

/// Delete a person and all of their books
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person removed", body = String),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<&'static str> {
    if !state.services.people.exists(id).await? {
        return Err(person_not_found(id));
    }

    state.services.people.delete(id).await?;
    tracing::info!("Person with id = {} was removed", id);
    Ok("Person was removed")
}
