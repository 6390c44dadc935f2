use std::fmt;

/// A single book in the catalog
#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub available: bool,
}

impl Book {
    /// New books start out available
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            available: true,
        }
    }

    /// Case-sensitive substring match on title or author
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword) || self.author.contains(keyword)
    }
}

// Availability is state, not identity
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.author == other.author && self.year == other.year
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.author, self.year)?;
        if self.available {
            write!(f, " [available]")
        } else {
            write!(f, " [borrowed]")
        }
    }
}
