//! The closed vocabulary a reader chooses from.
//!
//! Every recommendation request carries one answer per [`Axis`]. The built-in answers are
//! modelled as enums whose Japanese labels double as keys into the keyword dictionaries.
//! Each value also has an ASCII slug so it can be typed on a command line.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// One of the three questions a reader answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Theme of the book.
    Interest,
    /// How the reader feels right now.
    Feeling,
    /// Preferred reading style.
    Style,
}

impl Axis {
    /// All axes in question order.
    pub const ALL: [Self; 3] = [Self::Interest, Self::Feeling, Self::Style];

    /// Lowercase name used in config sections and messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Interest => "interest",
            Self::Feeling => "feeling",
            Self::Style => "style",
        }
    }

    /// Built-in `(slug, label, gloss)` entries for this axis.
    pub fn entries(self) -> Vec<(&'static str, &'static str, &'static str)> {
        match self {
            Self::Interest => Interest::ALL
                .iter()
                .map(|c| (c.slug(), c.label(), c.gloss()))
                .collect(),
            Self::Feeling => Feeling::ALL
                .iter()
                .map(|c| (c.slug(), c.label(), c.gloss()))
                .collect(),
            Self::Style => Style::ALL
                .iter()
                .map(|c| (c.slug(), c.label(), c.gloss()))
                .collect(),
        }
    }

    /// Returns true if `label` is a built-in label on this axis.
    pub fn is_builtin_label(self, label: &str) -> bool {
        self.entries().iter().any(|(_, l, _)| *l == label)
    }

    /// Maps user input to a dictionary label.
    ///
    /// Slugs and labels of the built-in vocabulary resolve to the label. Anything else is
    /// returned trimmed so that custom dictionary keys keep working.
    pub fn resolve_label(self, input: &str) -> String {
        let input = input.trim();
        self.entries()
            .into_iter()
            .find(|(slug, label, _)| slug.eq_ignore_ascii_case(input) || *label == input)
            .map_or_else(|| input.to_string(), |(_, label, _)| label.to_string())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared behavior of the per-axis vocabulary enums.
pub trait Category: Copy + Sized + 'static {
    /// The axis this category belongs to.
    const AXIS: Axis;
    /// Every value, in the order the questions list them.
    const ALL: &'static [Self];

    /// Japanese label, used as the dictionary key.
    fn label(self) -> &'static str;
    /// ASCII slug for command-line use.
    fn slug(self) -> &'static str;
    /// Short English gloss.
    fn gloss(self) -> &'static str;

    /// Finds the value whose label or slug equals `input`.
    fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == input || c.slug().eq_ignore_ascii_case(input))
    }

    /// Parses a label or slug, reporting the axis on failure.
    fn parse_category(input: &str) -> Result<Self, UnknownCategory> {
        Self::lookup(input).ok_or_else(|| UnknownCategory {
            axis: Self::AXIS,
            value: input.to_string(),
        })
    }
}

/// Theme of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    /// 自己理解・内省
    SelfUnderstanding,
    /// 習慣・ライフスタイル
    Habits,
    /// 仕事・キャリア
    Work,
    /// 人間関係・コミュニケーション
    Relationships,
    /// 恋愛・パートナーシップ
    Romance,
    /// 子育て・教育
    Parenting,
    /// 死生観・人生の意味
    MeaningOfLife,
}

impl Category for Interest {
    const AXIS: Axis = Axis::Interest;
    const ALL: &'static [Self] = &[
        Self::SelfUnderstanding,
        Self::Habits,
        Self::Work,
        Self::Relationships,
        Self::Romance,
        Self::Parenting,
        Self::MeaningOfLife,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::SelfUnderstanding => "自己理解・内省",
            Self::Habits => "習慣・ライフスタイル",
            Self::Work => "仕事・キャリア",
            Self::Relationships => "人間関係・コミュニケーション",
            Self::Romance => "恋愛・パートナーシップ",
            Self::Parenting => "子育て・教育",
            Self::MeaningOfLife => "死生観・人生の意味",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::SelfUnderstanding => "self",
            Self::Habits => "habits",
            Self::Work => "work",
            Self::Relationships => "relationships",
            Self::Romance => "romance",
            Self::Parenting => "parenting",
            Self::MeaningOfLife => "meaning",
        }
    }

    fn gloss(self) -> &'static str {
        match self {
            Self::SelfUnderstanding => "self-understanding",
            Self::Habits => "habits and lifestyle",
            Self::Work => "work and career",
            Self::Relationships => "relationships and communication",
            Self::Romance => "romance and partnership",
            Self::Parenting => "parenting and education",
            Self::MeaningOfLife => "the meaning of life",
        }
    }
}

/// How the reader feels right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feeling {
    /// 前向きになりたい
    Positive,
    /// 迷いを整理したい
    Untangle,
    /// 自分の軸を確かめたい
    Compass,
    /// 人間関係を整えたい
    Reconnect,
    /// 小さく動き出したい
    SmallStep,
}

impl Category for Feeling {
    const AXIS: Axis = Axis::Feeling;
    const ALL: &'static [Self] = &[
        Self::Positive,
        Self::Untangle,
        Self::Compass,
        Self::Reconnect,
        Self::SmallStep,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Positive => "前向きになりたい",
            Self::Untangle => "迷いを整理したい",
            Self::Compass => "自分の軸を確かめたい",
            Self::Reconnect => "人間関係を整えたい",
            Self::SmallStep => "小さく動き出したい",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Untangle => "untangle",
            Self::Compass => "compass",
            Self::Reconnect => "reconnect",
            Self::SmallStep => "small-step",
        }
    }

    fn gloss(self) -> &'static str {
        match self {
            Self::Positive => "want to feel positive",
            Self::Untangle => "want to untangle confusion",
            Self::Compass => "want to confirm my own compass",
            Self::Reconnect => "want to fix relationships",
            Self::SmallStep => "want to take a small step",
        }
    }
}

/// Preferred reading style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// さらっと読みたい
    Light,
    /// じっくり考えたい
    Deep,
    /// 具体的に実践したい
    Practical,
}

impl Category for Style {
    const AXIS: Axis = Axis::Style;
    const ALL: &'static [Self] = &[Self::Light, Self::Deep, Self::Practical];

    fn label(self) -> &'static str {
        match self {
            Self::Light => "さらっと読みたい",
            Self::Deep => "じっくり考えたい",
            Self::Practical => "具体的に実践したい",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Deep => "deep",
            Self::Practical => "practical",
        }
    }

    fn gloss(self) -> &'static str {
        match self {
            Self::Light => "a light read",
            Self::Deep => "something to think deeply about",
            Self::Practical => "concrete practice",
        }
    }
}

impl FromStr for Interest {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_category(s)
    }
}

impl FromStr for Feeling {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_category(s)
    }
}

impl FromStr for Style {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_category(s)
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
