//! Books service

use std::sync::Arc;

use crate::{error::AppResult, models::Book, repository::BooksRepository};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BooksRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BooksRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_by_person_id(&self, person_id: i32) -> AppResult<Vec<Book>> {
        tracing::info!("Returning books of person with id = {}", person_id);
        self.repository.find_by_owner(person_id).await
    }

    pub async fn find_by_created_between(&self, from: i32, to: i32) -> AppResult<Vec<Book>> {
        tracing::info!("Returning books in range from = {}, to = {}", from, to);
        self.repository.find_by_created_range(from, to).await
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        tracing::info!("Returning book with id = {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn save(&self, book: &Book) -> AppResult<Book> {
        tracing::info!("Keeping book {}", book);
        self.repository.save(book).await
    }

    pub async fn delete_by_person_id(&self, person_id: i32) -> AppResult<()> {
        tracing::info!("Deleting all books of person with id = {}", person_id);
        self.repository.delete_by_owner(person_id).await
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!("Deleting book with id = {}", id);
        self.repository.delete_by_id(id).await
    }
}
