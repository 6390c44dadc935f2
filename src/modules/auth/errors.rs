use std::fmt;
use std::io;

/// Outcome of a failed credential operation
#[derive(Debug)]
pub enum AuthError {
    InvalidLength,
    InvalidFormat,
    UsernameExists,
    WeakPassword,
    InvalidCredentials,
    Storage(io::Error),
}

impl AuthError {
    /// True for failures caused by the caller's input rather than the store file
    pub fn is_validation(&self) -> bool {
        !matches!(self, AuthError::Storage(_))
    }
}

// Implement conversion from io::Error to AuthError
impl From<io::Error> for AuthError {
    fn from(error: io::Error) -> Self {
        AuthError::Storage(error)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidLength => {
                write!(f, "Username and password must be 6 to 20 characters long")
            }
            AuthError::InvalidFormat => {
                write!(f, "Username or password contains characters that are not allowed")
            }
            AuthError::UsernameExists => write!(f, "Username already exists"),
            AuthError::WeakPassword => write!(f, "Password is too weak"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Storage(e) => Some(e),
            _ => None,
        }
    }
}
