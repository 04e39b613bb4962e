//! shiori: a small book recommender.
//!
//! A reader answers three questions (what they want to read about, how they feel, and how
//! they like to read) and shiori picks three books from a spreadsheet-exported catalog: the
//! best match, a runner-up, and one exploratory pick. When too few books match, the result
//! is filled from the rest of the catalog and those books are marked as supplemented.

#![warn(missing_docs)]

pub mod cli;
