//! Repository layer: entity store interface and its backends

pub mod books;
pub mod memory;
pub mod people;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, Person},
};

pub use memory::MemoryRepository;

/// Persistence of people
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Person>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Person>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Inserts when `person.id` is unknown (or 0), overwrites otherwise.
    /// Returns the stored row with its generated id.
    async fn save(&self, person: &Person) -> AppResult<Person>;

    /// Removes the person and, by cascade, every book it owns
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Persistence of books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn find_by_owner(&self, person_id: i32) -> AppResult<Vec<Book>>;

    /// Books whose year lies in `[from, to]`
    async fn find_by_created_range(&self, from: i32, to: i32) -> AppResult<Vec<Book>>;

    /// Same insert-or-overwrite contract as [`PeopleRepository::save`].
    /// Fails with `CreationFailed` when the owner does not exist.
    async fn save(&self, book: &Book) -> AppResult<Book>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    async fn delete_by_owner(&self, person_id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgRepository {
    pub pool: Pool<Postgres>,
}

impl PgRepository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
