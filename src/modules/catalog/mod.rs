pub mod library;
pub mod model;
pub mod user_interface;

pub use library::{CatalogError, Library};
pub use model::Book;
pub use user_interface::run_library_shell;
