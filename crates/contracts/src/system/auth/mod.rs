use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// localStorage key marking an authenticated admin
pub const ADMIN_FLAG_KEY: &str = "isAdminAuthenticated";
/// Value stored under [`ADMIN_FLAG_KEY`] after a successful login
pub const ADMIN_FLAG_VALUE: &str = "true";

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

/// Fixed pause before credentials are checked
pub const LOGIN_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Opaque handle issued by a [`CredentialVerifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn issue() -> Self {
        Self(format!("session-{}", Uuid::new_v4()))
    }

    /// Token for a session rebuilt from the persisted flag
    pub fn restored() -> Self {
        Self("session-restored".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

/// Checks a username/password pair and issues a session.
///
/// The dashboard ships only [`DemoCredentialVerifier`]; a deployment with a
/// real identity provider plugs in here.
pub trait CredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<SessionToken, AuthError>;
}

/// Accepts exactly one hard-coded pair
#[derive(Debug, Clone)]
pub struct DemoCredentialVerifier {
    expected: Credentials,
}

impl DemoCredentialVerifier {
    pub fn new() -> Self {
        Self {
            expected: Credentials::new(DEMO_USERNAME, DEMO_PASSWORD),
        }
    }
}

impl Default for DemoCredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for DemoCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        if credentials == &self.expected {
            Ok(SessionToken::issue())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Admin session as seen by route guards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    Unauthenticated,
    Authenticated(SessionToken),
}

impl AdminSession {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AdminSession::Authenticated(_))
    }

    /// Rebuild the session from the raw localStorage value
    pub fn from_stored_flag(value: Option<&str>) -> Self {
        match value {
            Some(ADMIN_FLAG_VALUE) => AdminSession::Authenticated(SessionToken::restored()),
            _ => AdminSession::Unauthenticated,
        }
    }

    /// Value to persist, `None` means the key should be removed
    pub fn stored_flag(&self) -> Option<&'static str> {
        match self {
            AdminSession::Authenticated(_) => Some(ADMIN_FLAG_VALUE),
            AdminSession::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_pair_is_accepted() {
        let verifier = DemoCredentialVerifier::new();
        let token = verifier.verify(&Credentials::new("admin", "admin123"));
        assert!(token.is_ok());
        assert!(token.unwrap().as_str().starts_with("session-"));
    }

    #[test]
    fn test_other_pairs_are_rejected() {
        let verifier = DemoCredentialVerifier::new();
        for (user, pass) in [
            ("admin", "admin"),
            ("Admin", "admin123"),
            ("admin ", "admin123"),
            ("", ""),
            ("root", "admin123"),
        ] {
            assert_eq!(
                verifier.verify(&Credentials::new(user, pass)),
                Err(AuthError::InvalidCredentials)
            );
        }
    }

    #[test]
    fn test_session_flag_round_trip() {
        let session = AdminSession::Authenticated(SessionToken::issue());
        assert_eq!(session.stored_flag(), Some("true"));
        assert!(AdminSession::from_stored_flag(session.stored_flag()).is_authenticated());

        assert_eq!(AdminSession::Unauthenticated.stored_flag(), None);
        assert!(!AdminSession::from_stored_flag(None).is_authenticated());
        assert!(!AdminSession::from_stored_flag(Some("false")).is_authenticated());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Please try again."
        );
    }
}
