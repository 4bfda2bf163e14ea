//! People queries on PgRepository

use async_trait::async_trait;

use super::{PeopleRepository, PgRepository};
use crate::{
    error::{AppError, AppResult},
    models::Person,
};

#[async_trait]
impl PeopleRepository for PgRepository {
    async fn find_all(&self) -> AppResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, Person>("SELECT * FROM person ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Person>> {
        let row = sqlx::query_as::<_, Person>("SELECT * FROM person WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM person WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn save(&self, person: &Person) -> AppResult<Person> {
        if person.id > 0 {
            let updated = sqlx::query_as::<_, Person>(
                r#"
                UPDATE person SET name = $2, age = $3, email = $4
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(person.id)
            .bind(&person.name)
            .bind(person.age)
            .bind(&person.email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_write)?;

            if let Some(row) = updated {
                return Ok(row);
            }
        }

        sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO person (name, age, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&person.name)
        .bind(person.age)
        .bind(&person.email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
