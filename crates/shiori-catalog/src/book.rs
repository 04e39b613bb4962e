//! Book records and the title-unique catalog.

use std::{collections::HashSet, slice};

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Every field is always present; a missing value is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Unique title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Free-text keyword list.
    pub keywords: String,
    /// ISBN as written in the source, possibly empty.
    pub isbn: String,
}

impl Book {
    /// Creates a book with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Sets the ISBN.
    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }
}

/// An ordered sequence of books with unique titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Books in source order.
    books: Vec<Book>,
}

impl Catalog {
    /// Builds a catalog, keeping the first book for each title.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut seen = HashSet::new();
        let books = books
            .into_iter()
            .filter(|book| seen.insert(book.title.clone()))
            .collect();
        Self { books }
    }

    /// Books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog has no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over books in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Looks up a book by exact title.
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
