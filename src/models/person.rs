//! Person model and transfer object

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::null_as_default;
use crate::validation::{not_blank, well_formed_email, FieldOrder};

/// Person record as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Person as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PersonDto {
    /// Generated on creation; selects the row to overwrite on update
    #[serde(default)]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "Name should not be empty"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 0, message = "Age should be greater than 0"))]
    pub age: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "well_formed_email"))]
    pub email: String,
}

impl FieldOrder for PersonDto {
    const FIELDS: &'static [&'static str] = &["name", "age", "email"];
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(id={}, name={}, age={}, email={})",
            self.id, self.name, self.age, self.email
        )
    }
}

impl fmt::Display for PersonDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PersonDto(id={}, name={}, age={}, email={})",
            self.id, self.name, self.age, self.email
        )
    }
}
