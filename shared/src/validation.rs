//! Input validation functions
//!
//! Validation rules applied to signup and booking input before it
//! reaches the database. Email format checking delegates to the
//! `validator` crate.

use validator::ValidateEmail;

/// Maximum accepted email length
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Maximum accepted display name length
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum accepted password length in bytes
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum seats per booking
pub const MAX_SEATS_PER_BOOKING: i32 = 20;

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a password
///
/// There is no minimum length requirement; any non-empty password up to
/// the length cap is accepted.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a booking seat count
pub fn validate_seat_count(seats: i32) -> Result<(), String> {
    if seats < 1 {
        return Err("Seat count must be at least 1".to_string());
    }
    if seats > MAX_SEATS_PER_BOOKING {
        return Err(format!(
            "Seat count must be at most {}",
            MAX_SEATS_PER_BOOKING
        ));
    }
    Ok(())
}
