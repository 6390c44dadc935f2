// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, catalog, config, utils};

// Re-export commonly used types
pub use modules::auth::{AuthError, CredentialStore, SharedCredentialStore};
pub use modules::catalog::{Book, Library};
pub use modules::config::AppConfig;

// Constants
pub const USERS_FILE: &str = "users.txt";
pub const CONFIG_FILE: &str = "olind.json";
pub const LOG_FILE: &str = "application.log";
pub const MIN_FIELD_LENGTH: usize = 6;
pub const MAX_FIELD_LENGTH: usize = 20;
pub const MIN_STRONG_PASSWORD_LENGTH: usize = 8;
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";
pub const DEFAULT_LIBRARY_CAPACITY: usize = 100;
