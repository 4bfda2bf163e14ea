//! People service

use std::sync::Arc;

use crate::{error::AppResult, models::Person, repository::PeopleRepository};

#[derive(Clone)]
pub struct PeopleService {
    repository: Arc<dyn PeopleRepository>,
}

impl PeopleService {
    pub fn new(repository: Arc<dyn PeopleRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Person>> {
        tracing::info!("Returning all people");
        self.repository.find_all().await
    }

    pub async fn find_one(&self, id: i32) -> AppResult<Option<Person>> {
        tracing::info!("Returning person with id = {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn save(&self, person: &Person) -> AppResult<Person> {
        tracing::info!("Keeping person {}", person);
        self.repository.save(person).await
    }

    /// Overwrites the person stored under `id`
    pub async fn update(&self, id: i32, person: Person) -> AppResult<Person> {
        let person = Person { id, ..person };
        tracing::info!("Updating person {} with id = {}", person, id);
        self.repository.save(&person).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        tracing::info!("Removing person with id = {}", id);
        self.repository.delete_by_id(id).await
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        tracing::info!("Checking person with id = {}", id);
        self.repository.exists(id).await
    }
}
