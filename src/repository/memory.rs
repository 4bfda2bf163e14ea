//! In-process store
//!
//! Keeps people and books in shared tables and applies the same rules the
//! database schema does: a book needs an existing owner, and removing a
//! person removes its books.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use super::{BooksRepository, PeopleRepository};
use crate::{
    error::{AppError, AppResult},
    models::{Book, Person},
};

#[derive(Debug, Default)]
struct Tables {
    people: BTreeMap<i32, Person>,
    books: BTreeMap<i32, Book>,
    next_person_id: i32,
    next_book_id: i32,
}

impl Tables {
    fn person_id(&mut self) -> i32 {
        self.next_person_id += 1;
        self.next_person_id
    }

    fn book_id(&mut self) -> i32 {
        self.next_book_id += 1;
        self.next_book_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // Each operation leaves the tables consistent, so a poisoned lock
        // still guards valid data.
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PeopleRepository for MemoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Person>> {
        Ok(self.tables().people.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Person>> {
        Ok(self.tables().people.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables().people.contains_key(&id))
    }

    async fn save(&self, person: &Person) -> AppResult<Person> {
        let mut tables = self.tables();
        let id = if tables.people.contains_key(&person.id) {
            person.id
        } else {
            tables.person_id()
        };

        let stored = Person {
            id,
            ..person.clone()
        };
        tables.people.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let mut tables = self.tables();
        if tables.people.remove(&id).is_some() {
            tables.books.retain(|_, book| book.owner_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl BooksRepository for MemoryRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.tables().books.get(&id).cloned())
    }

    async fn find_by_owner(&self, person_id: i32) -> AppResult<Vec<Book>> {
        Ok(self
            .tables()
            .books
            .values()
            .filter(|book| book.owner_id == person_id)
            .cloned()
            .collect())
    }

    async fn find_by_created_range(&self, from: i32, to: i32) -> AppResult<Vec<Book>> {
        Ok(self
            .tables()
            .books
            .values()
            .filter(|book| (from..=to).contains(&book.year))
            .cloned()
            .collect())
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        let mut tables = self.tables();
        if !tables.people.contains_key(&book.owner_id) {
            return Err(AppError::CreationFailed(format!(
                "Person with id = {} doesn't exist",
                book.owner_id
            )));
        }

        let id = if tables.books.contains_key(&book.id) {
            book.id
        } else {
            tables.book_id()
        };

        let stored = Book {
            id,
            ..book.clone()
        };
        tables.books.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.tables().books.remove(&id);
        Ok(())
    }

    async fn delete_by_owner(&self, person_id: i32) -> AppResult<()> {
        self.tables().books.retain(|_, book| book.owner_id != person_id);
        Ok(())
    }
}
