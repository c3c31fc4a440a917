//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod recommendation;
pub mod user;

pub use recommendation::{RecommendationService, UserRecommendations};
pub use user::UserService;
