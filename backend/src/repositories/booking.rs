//! Booking repository
//!
//! Bookings reference a show, which references a movie. The watched
//! history handed to the recommender is derived from this chain.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Booking record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingRecord {
    pub id: i64,
    pub user_id: i64,
    pub show_id: i64,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

/// Booking joined with its show time and movie title
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingDetailRecord {
    pub id: i64,
    pub movie_title: String,
    pub starts_at: DateTime<Utc>,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

/// A movie a user has watched, reached through a booking
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WatchedMovieRecord {
    pub title: String,
    pub genre: String,
}

/// Booking repository for database operations
pub struct BookingRepository;

impl BookingRepository {
    /// Create a booking for a user on a show
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        show_id: i64,
        seats: i32,
    ) -> Result<BookingRecord, sqlx::Error> {
        let booking = sqlx::query_as::<_, BookingRecord>(
            r#"
            INSERT INTO bookings (user_id, show_id, seats)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, show_id, seats, created_at
            "#,
        )
        .bind(user_id)
        .bind(show_id)
        .bind(seats)
        .fetch_one(pool)
        .await?;

        Ok(booking)
    }

    /// Check that a show exists
    pub async fn show_exists(pool: &PgPool, show_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM shows WHERE id = $1)
            "#,
        )
        .bind(show_id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// List a user's bookings with show and movie context, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Vec<BookingDetailRecord>, sqlx::Error> {
        let bookings = sqlx::query_as::<_, BookingDetailRecord>(
            r#"
            SELECT b.id, m.title AS movie_title, s.starts_at, b.seats, b.created_at
            FROM bookings b
            JOIN shows s ON s.id = b.show_id
            JOIN movies m ON m.id = s.movie_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC, b.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// A user's watched movies in booking order
    ///
    /// The order is part of the recommendation contract: the prompt sent
    /// upstream lists the history as it was booked.
    pub async fn watched_movies(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Vec<WatchedMovieRecord>, sqlx::Error> {
        let watched = sqlx::query_as::<_, WatchedMovieRecord>(
            r#"
            SELECT m.title, m.genre
            FROM bookings b
            JOIN shows s ON s.id = b.show_id
            JOIN movies m ON m.id = s.movie_id
            WHERE b.user_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(watched)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
    // Run with: cargo test --features integration -- --ignored
}
