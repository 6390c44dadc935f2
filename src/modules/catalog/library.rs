use std::fmt;

use super::model::Book;
use crate::modules::utils::logging::log_catalog_operation;
use crate::DEFAULT_LIBRARY_CAPACITY;

/// Custom error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Full(usize),
    AlreadyExists,
    NotAvailable(String),
    NotBorrowed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Full(capacity) => {
                write!(f, "The library is full ({} books), cannot add more", capacity)
            }
            CatalogError::AlreadyExists => write!(f, "This book is already in the library"),
            CatalogError::NotAvailable(title) => {
                write!(f, "No available copy of \"{}\" was found", title)
            }
            CatalogError::NotBorrowed(title) => {
                write!(f, "No borrowed copy of \"{}\" was found", title)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// In-memory book catalog with a fixed capacity
#[derive(Debug)]
pub struct Library {
    books: Vec<Book>,
    capacity: usize,
}

impl Default for Library {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LIBRARY_CAPACITY)
    }
}

impl Library {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            books: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Add a book unless the library is full or an identical book exists
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
    ) -> Result<(), CatalogError> {
        let result = if self.books.len() >= self.capacity {
            Err(CatalogError::Full(self.capacity))
        } else {
            let book = Book::new(title, author, year);
            if self.books.contains(&book) {
                Err(CatalogError::AlreadyExists)
            } else {
                self.books.push(book);
                Ok(())
            }
        };
        log_result("add", title, &result);
        result
    }

    /// Books whose title or author contains `keyword`, in insertion order
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.matches_keyword(keyword))
            .collect()
    }

    /// Mark the first available book with this exact title as borrowed
    pub fn borrow_book(&mut self, title: &str) -> Result<(), CatalogError> {
        let result = match self
            .books
            .iter_mut()
            .find(|book| book.title == title && book.available)
        {
            Some(book) => {
                book.available = false;
                Ok(())
            }
            None => Err(CatalogError::NotAvailable(title.to_string())),
        };
        log_result("borrow", title, &result);
        result
    }

    /// Mark the first borrowed book with this exact title as available again
    pub fn return_book(&mut self, title: &str) -> Result<(), CatalogError> {
        let result = match self
            .books
            .iter_mut()
            .find(|book| book.title == title && !book.available)
        {
            Some(book) => {
                book.available = true;
                Ok(())
            }
            None => Err(CatalogError::NotBorrowed(title.to_string())),
        };
        log_result("return", title, &result);
        result
    }
}

fn log_result(operation: &str, title: &str, result: &Result<(), CatalogError>) {
    match result {
        Ok(()) => log_catalog_operation(operation, title, true, None),
        Err(e) => log_catalog_operation(operation, title, false, Some(&e.to_string())),
    }
}
