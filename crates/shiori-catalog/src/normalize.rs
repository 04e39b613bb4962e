//! Row normalization.
//!
//! Raw rows come from spreadsheets exported by hand, so header names drift: stray quotes,
//! embedded newlines, and names like `Book Title` or `keywords(カンマ区切り)`. Headers are
//! cleaned and matched against loose aliases, values are trimmed, and rows are
//! deduplicated by title.

use std::collections::HashSet;

use tracing::debug;

use crate::{Book, Catalog};

/// One source row as an ordered list of `(header, value)` pairs.
pub type RawRow = Vec<(String, String)>;

/// Counts collected while normalizing rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rows seen.
    pub rows: usize,
    /// Rows kept in the catalog.
    pub kept: usize,
    /// Rows dropped because an earlier row had the same title.
    pub duplicates: usize,
    /// Rows dropped because the title was empty.
    pub untitled: usize,
}

/// Book field a header maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// `title`.
    Title,
    /// `description`.
    Description,
    /// `keywords`.
    Keywords,
    /// `isbn`.
    Isbn,
}

/// Strips quotes and line breaks from a header, then trims it.
pub fn clean_header(header: &str) -> String {
    header.replace(['"', '\n', '\r'], "").trim().to_string()
}

/// Maps a cleaned header to the field it feeds, if any.
///
/// Description and keyword aliases take precedence over title, and `amazon` columns are
/// never mistaken for a title.
fn field_for(header: &str) -> Option<Field> {
    let lc = header.to_lowercase();
    if lc.contains("description") {
        Some(Field::Description)
    } else if lc.contains("keyword") {
        Some(Field::Keywords)
    } else if lc.contains("amazon") {
        None
    } else if lc.contains("title") && !lc.contains(' ') {
        Some(Field::Title)
    } else if lc.contains("isbn") {
        Some(Field::Isbn)
    } else {
        None
    }
}

/// Builds a book from one row. The first non-empty value for a field wins.
fn book_from_row(row: RawRow) -> Book {
    let mut book = Book::default();
    for (header, value) in row {
        let Some(field) = field_for(&clean_header(&header)) else {
            continue;
        };
        let slot = match field {
            Field::Title => &mut book.title,
            Field::Description => &mut book.description,
            Field::Keywords => &mut book.keywords,
            Field::Isbn => &mut book.isbn,
        };
        if slot.is_empty() {
            *slot = value.trim().to_string();
        }
    }
    book
}

/// Normalizes raw rows into a title-unique catalog.
///
/// Rows with an empty title are skipped. When titles repeat, the first row wins.
pub fn normalize_rows(rows: impl IntoIterator<Item = RawRow>) -> (Catalog, NormalizeReport) {
    let mut report = NormalizeReport::default();
    let mut seen = HashSet::new();
    let mut books = Vec::new();

    for row in rows {
        report.rows += 1;
        let book = book_from_row(row);
        if book.title.is_empty() {
            report.untitled += 1;
            continue;
        }
        if !seen.insert(book.title.clone()) {
            report.duplicates += 1;
            continue;
        }
        books.push(book);
    }

    report.kept = books.len();
    debug!(
        rows = report.rows,
        kept = report.kept,
        duplicates = report.duplicates,
        untitled = report.untitled,
        "normalized catalog rows"
    );
    (Catalog::from_books(books), report)
}
