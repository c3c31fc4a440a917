//! Booking routes
//!
//! Bookings are per-user and require authentication. They are also the
//! source of the watched-movie history the recommender consumes.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::BookingRepository;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use cinebook_shared::types::{BookingConfirmation, BookingView, CreateBookingRequest};
use cinebook_shared::validation::validate_seat_count;

/// Create booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/", get(list_bookings).post(create_booking))
}

/// List the authenticated user's bookings
///
/// GET /api/v1/bookings
async fn list_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<BookingView>>> {
    let bookings = BookingRepository::list_for_user(state.db(), auth_user.user_id).await?;

    Ok(Json(
        bookings
            .into_iter()
            .map(|booking| BookingView {
                id: booking.id,
                movie_title: booking.movie_title,
                starts_at: booking.starts_at,
                seats: booking.seats,
                created_at: booking.created_at,
            })
            .collect(),
    ))
}

/// Book seats for a show
///
/// POST /api/v1/bookings
async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingConfirmation>)> {
    validate_seat_count(req.seats).map_err(ApiError::Validation)?;

    if !BookingRepository::show_exists(state.db(), req.show_id).await? {
        return Err(ApiError::NotFound("Show not found".to_string()));
    }

    let booking =
        BookingRepository::create(state.db(), auth_user.user_id, req.show_id, req.seats).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingConfirmation {
            id: booking.id,
            show_id: booking.show_id,
            seats: booking.seats,
            created_at: booking.created_at,
        }),
    ))
}
