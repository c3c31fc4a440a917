//! Movie catalog routes

use crate::error::ApiResult;
use crate::repositories::MovieRepository;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use cinebook_shared::types::MovieView;

/// Create movie routes
pub fn movie_routes() -> Router<AppState> {
    Router::new().route("/", get(list_movies))
}

/// List the movie catalog
///
/// GET /api/v1/movies
async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieView>>> {
    let movies = MovieRepository::list(state.db()).await?;

    Ok(Json(
        movies
            .into_iter()
            .map(|movie| MovieView {
                id: movie.id,
                title: movie.title,
                genre: movie.genre,
            })
            .collect(),
    ))
}
