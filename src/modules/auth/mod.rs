pub mod errors;
pub mod hasher;
pub mod shared;
pub mod store;
pub mod user_interface;
pub mod validator;

// Re-export the main types and functions
pub use errors::AuthError;
pub use hasher::hash_password;
pub use shared::SharedCredentialStore;
pub use store::{Account, CredentialStore};
pub use user_interface::run_account_shell;
pub use validator::{
    check_format, check_length, check_password_format, check_strength, validate_strength,
    PasswordError,
};
