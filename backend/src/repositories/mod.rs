//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod booking;
pub mod movie;
pub mod user;

pub use booking::{BookingDetailRecord, BookingRecord, BookingRepository, WatchedMovieRecord};
pub use movie::{MovieRecord, MovieRepository};
pub use user::{UserRecord, UserRepository};
