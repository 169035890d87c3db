//! Messages shown to the user by the auth flows.

use shopdesk_api::ApiError;

pub const LOGIN_SUCCESS: &str = "Login successfully!";
pub const LOGIN_REJECTED: &str = "Username or password incorrect";
pub const LOGIN_INVALID: &str = "Invalid input";
pub const SERVER_ERROR: &str = "Server error, please try again later";
pub const REGISTER_SUCCESS: &str = "Registration successful";
pub const REGISTER_FAILURE: &str = "Registration failed, please try again";

/// Picks the alert shown when a login attempt fails.
pub fn login_failure(err: &ApiError) -> &'static str {
    match err.status_code() {
        Some(401) => LOGIN_REJECTED,
        Some(400) => LOGIN_INVALID,
        _ => SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_by_status() {
        assert_eq!(login_failure(&ApiError::status(401, None)), LOGIN_REJECTED);
        assert_eq!(login_failure(&ApiError::status(400, Some("bad"))), LOGIN_INVALID);
        assert_eq!(login_failure(&ApiError::status(404, None)), SERVER_ERROR);
        assert_eq!(
            login_failure(&ApiError::Config("offline".to_string())),
            SERVER_ERROR
        );
    }
}
