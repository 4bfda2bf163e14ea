//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{
    extract::{AppJson, AppPath, AppQuery},
    people::person_not_found,
};
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDto, BookRangeQuery},
    validation::ensure_valid,
    AppState,
};

fn book_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book with id = {} isn't found", id))
}

fn to_dtos(state: &AppState, books: &[Book]) -> Vec<BookDto> {
    books.iter().map(|b| state.converter.book_to_dto(b)).collect()
}

async fn ensure_person_exists(state: &AppState, person_id: i32) -> AppResult<()> {
    if state.services.people.exists(person_id).await? {
        return Ok(());
    }
    tracing::error!("Person with id = {} isn't found", person_id);
    Err(person_not_found(person_id))
}

/// List the books of a person
#[utoipa::path(
    get,
    path = "/people/{id}/books",
    tag = "books",
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Books owned by the person", body = Vec<BookDto>),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_person_books(
    State(state): State<AppState>,
    AppPath(person_id): AppPath<i32>,
) -> AppResult<Json<Vec<BookDto>>> {
    ensure_person_exists(&state, person_id).await?;

    let books = state.services.books.find_by_person_id(person_id).await?;
    tracing::info!("Person with id = {} owns {} books", person_id, books.len());
    Ok(Json(to_dtos(&state, &books)))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<BookDto>> {
    let book = state
        .services
        .books
        .find_by_id(id)
        .await?
        .ok_or_else(|| book_not_found(id))?;
    let dto = state.converter.book_to_dto(&book);
    tracing::info!("Getting book by id = {}: {}", id, dto);
    Ok(Json(dto))
}

/// Books written within a range of years.
///
/// An empty result is reported as not found rather than as an empty list.
#[utoipa::path(
    get,
    path = "/books_range",
    tag = "books",
    params(BookRangeQuery),
    responses(
        (status = 200, description = "Books in range", body = Vec<BookDto>),
        (status = 404, description = "No book in range", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_in_range(
    State(state): State<AppState>,
    AppQuery(range): AppQuery<BookRangeQuery>,
) -> AppResult<Json<Vec<BookDto>>> {
    let books = state
        .services
        .books
        .find_by_created_between(range.from, range.to)
        .await?;

    if books.is_empty() {
        tracing::error!("There are no books in range from {} to {} years", range.from, range.to);
        return Err(AppError::NotFound("Books aren't found".to_string()));
    }

    tracing::info!("{} books in range from {} to {} years", books.len(), range.from, range.to);
    Ok(Json(to_dtos(&state, &books)))
}

/// Create a book owned by a person
#[utoipa::path(
    post,
    path = "/people/{id}/books",
    tag = "books",
    params(("id" = i32, Path, description = "Owner ID")),
    request_body = BookDto,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Invalid book or unknown owner", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AppPath(person_id): AppPath<i32>,
    AppJson(dto): AppJson<BookDto>,
) -> AppResult<(StatusCode, Json<BookDto>)> {
    let owner = state
        .services
        .people
        .find_one(person_id)
        .await?
        .ok_or_else(|| AppError::CreationFailed("Book isn't created!".to_string()))?;

    ensure_valid(&dto)?;

    let request = BookDto {
        id: 0,
        owner: Some(state.converter.person_to_dto(&owner)),
        ..dto
    };
    let book = state.converter.dto_to_book(&request)?;
    let stored = state.services.books.save(&book).await?;
    tracing::info!("Book {} created with personId = {}", stored, person_id);

    Ok((StatusCode::CREATED, Json(state.converter.book_to_dto(&stored))))
}

/// Rename a book.
///
/// Only the title is taken from the request; the stored year is kept even
/// when the body carries a different one.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookDto,
    responses(
        (status = 200, description = "Book updated", body = BookDto),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BookDto>,
) -> AppResult<Json<BookDto>> {
    let existing = state
        .services
        .books
        .find_by_id(id)
        .await?
        .ok_or_else(|| book_not_found(id))?;

    ensure_valid(&dto)?;

    let book = Book {
        title: dto.title,
        ..existing
    };
    let stored = state.services.books.save(&book).await?;
    tracing::info!("Book with id = {} was updated, new data: {}", id, stored);

    Ok(Json(state.converter.book_to_dto(&stored)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    if state.services.books.find_by_id(id).await?.is_none() {
        return Err(book_not_found(id));
    }

    state.services.books.delete_by_id(id).await?;
    tracing::info!("Book with id = {} was removed", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every book of a person
#[utoipa::path(
    delete,
    path = "/people/{id}/books",
    tag = "books",
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Books deleted"),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_person_books(
    State(state): State<AppState>,
    AppPath(person_id): AppPath<i32>,
) -> AppResult<StatusCode> {
    ensure_person_exists(&state, person_id).await?;

    state.services.books.delete_by_person_id(person_id).await?;
    tracing::info!("Person with id = {} hasn't got books", person_id);
    Ok(StatusCode::NO_CONTENT)
}
