//! The reader's three answers.

use std::fmt;

use serde::Serialize;
use shiori_config::{Axis, Category, Feeling, Interest, Style};

/// One answer per axis, stored as dictionary labels.
///
/// Labels outside the built-in vocabulary are allowed; an axis whose label has no
/// dictionary entry contributes nothing to a score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    /// Interest label.
    pub interest: String,
    /// Feeling label.
    pub feeling: String,
    /// Style label.
    pub style: String,
}

impl Selection {
    /// Creates a selection from raw labels.
    pub fn new(
        interest: impl Into<String>,
        feeling: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            interest: interest.into(),
            feeling: feeling.into(),
            style: style.into(),
        }
    }

    /// Creates a selection from built-in categories.
    pub fn from_categories(interest: Interest, feeling: Feeling, style: Style) -> Self {
        Self::new(interest.label(), feeling.label(), style.label())
    }

    /// Creates a selection from user input, mapping slugs to labels.
    pub fn resolve(interest: &str, feeling: &str, style: &str) -> Self {
        Self {
            interest: Axis::Interest.resolve_label(interest),
            feeling: Axis::Feeling.resolve_label(feeling),
            style: Axis::Style.resolve_label(style),
        }
    }

    /// Label for `axis`.
    pub fn label(&self, axis: Axis) -> &str {
        match axis {
            Axis::Interest => &self.interest,
            Axis::Feeling => &self.feeling,
            Axis::Style => &self.style,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.interest, self.feeling, self.style)
    }
}
