//! Mapping between stored records and transfer objects

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDto, Person, PersonDto},
};

/// Stateless entity/DTO mapper.
///
/// One instance is created at startup, kept in `AppState` and borrowed by
/// handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    pub fn person_to_dto(&self, person: &Person) -> PersonDto {
        PersonDto {
            id: person.id,
            name: person.name.clone(),
            age: person.age,
            email: person.email.clone(),
        }
    }

    pub fn dto_to_person(&self, dto: &PersonDto) -> Person {
        Person {
            id: dto.id,
            name: dto.name.clone(),
            age: dto.age,
            email: dto.email.clone(),
        }
    }

    /// The owner is never carried into the outgoing representation.
    pub fn book_to_dto(&self, book: &Book) -> BookDto {
        BookDto {
            id: book.id,
            title: book.title.clone(),
            year: book.year,
            owner: None,
        }
    }

    /// Fails when no owner has been attached to `dto`.
    pub fn dto_to_book(&self, dto: &BookDto) -> AppResult<Book> {
        let owner = dto
            .owner
            .as_ref()
            .ok_or_else(|| AppError::CreationFailed("Book owner is not attached".to_string()))?;

        Ok(Book {
            id: dto.id,
            owner_id: owner.id,
            title: dto.title.clone(),
            year: dto.year,
        })
    }
}
