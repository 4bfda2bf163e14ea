//! Book model and transfer object

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{null_as_default, person::PersonDto};
use crate::validation::{not_blank, FieldOrder};

/// Book record as stored. Every book belongs to exactly one person.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i32,
    #[sqlx(rename = "person_id")]
    pub owner_id: i32,
    pub title: String,
    pub year: i32,
}

/// Book as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "Title should not be empty"))]
    pub title: String,
    /// Year the book was written; ignored on update
    #[serde(default)]
    pub year: i32,
    /// Attached by the server when a book is created, never read from or
    /// written to a request body.
    #[serde(skip)]
    pub owner: Option<PersonDto>,
}

impl FieldOrder for BookDto {
    const FIELDS: &'static [&'static str] = &["title", "year"];
}

/// Inclusive range of creation years
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookRangeQuery {
    pub from: i32,
    pub to: i32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book(id={}, title={})", self.id, self.title)
    }
}

impl fmt::Display for BookDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookDto(id={}, title={})", self.id, self.title)
    }
}
