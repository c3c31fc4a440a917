//! Movie catalog repository

use sqlx::PgPool;

/// Movie record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub genre: String,
}

/// Movie repository for database operations
pub struct MovieRepository;

impl MovieRepository {
    /// List the movie catalog
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let movies = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, genre
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(movies)
    }
}
