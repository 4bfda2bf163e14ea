//! Business logic services

pub mod books;
pub mod people;

use std::sync::Arc;

use crate::repository::{BooksRepository, PeopleRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub people: people::PeopleService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services over the given stores
    pub fn new(people: Arc<dyn PeopleRepository>, books: Arc<dyn BooksRepository>) -> Self {
        Self {
            people: people::PeopleService::new(people),
            books: books::BooksService::new(books),
        }
    }
}
