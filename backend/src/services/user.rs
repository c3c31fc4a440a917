//! User service for signup, login and identity lookups
//!
//! Login failures are deliberately uniform: an unknown email and a wrong
//! password produce the same error, so the response cannot be used to
//! probe which emails are registered.
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)
//! - Database queries use connection pooling

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use cinebook_shared::models::Role;
use cinebook_shared::types::{LoginRequest, LoginResponse, SignupRequest, UserView};
use cinebook_shared::validation::{validate_email, validate_name, validate_password};
use sqlx::PgPool;

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Register a new user and return the public view
    ///
    /// # Performance
    /// Password hashing is offloaded to blocking thread pool via `spawn_blocking`.
    pub async fn signup(pool: &PgPool, req: &SignupRequest) -> Result<UserView, ApiError> {
        validate_name(&req.name).map_err(ApiError::Validation)?;
        validate_email(&req.email).map_err(ApiError::Validation)?;
        validate_password(&req.password).map_err(ApiError::Validation)?;

        // Check if email already exists; the unique constraint backstops
        // concurrent signups
        if UserRepository::email_exists(pool, &req.email).await? {
            return Err(ApiError::DuplicateEmail);
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            &req.name,
            &req.email,
            &password_hash,
            Role::User.as_str(),
        )
        .await?;

        Ok(UserView {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    /// Login with email and password, issuing a bearer token
    ///
    /// # Performance
    /// Password verification is offloaded to blocking thread pool.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        // An unknown email takes this exit; a wrong password takes the
        // one below. Both map to the same response.
        let user = UserRepository::find_by_email(pool, &req.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(req.password.clone(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        // Issue the token (uses pre-computed keys - fast)
        let access_token = jwt_service
            .issue(user.id, &user.role)
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: UserView {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        })
    }

    /// Load the public view for an authenticated user id
    pub async fn profile(pool: &PgPool, user_id: i64) -> Result<UserView, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserView {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
