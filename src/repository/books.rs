//! Book queries on PgRepository

use async_trait::async_trait;

use super::{BooksRepository, PgRepository};
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

#[async_trait]
impl BooksRepository for PgRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM book WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_owner(&self, person_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM book WHERE person_id = $1 ORDER BY id")
            .bind(person_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_created_range(&self, from: i32, to: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM book WHERE year BETWEEN $1 AND $2 ORDER BY id",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        if book.id > 0 {
            let updated = sqlx::query_as::<_, Book>(
                r#"
                UPDATE book SET person_id = $2, title = $3, year = $4
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(book.id)
            .bind(book.owner_id)
            .bind(&book.title)
            .bind(book.year)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_write)?;

            if let Some(row) = updated {
                return Ok(row);
            }
        }

        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (person_id, title, year)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(book.owner_id)
        .bind(&book.title)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_owner(&self, person_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book WHERE person_id = $1")
            .bind(person_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
