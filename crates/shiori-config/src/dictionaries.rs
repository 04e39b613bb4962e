//! Keyword dictionaries used for scoring.
//!
//! Dictionaries are plain data: per-axis term lists keyed by category label, a penalty list
//! per theme, the theme×feeling pairs that earn a bonus, and the hint shown next to books
//! that were added to fill the result.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::vocab::{Axis, Category, Feeling, Interest, Style};

/// Label to term list mapping for one axis.
pub type TermTable = BTreeMap<String, Vec<String>>;

/// A theme×feeling combination that earns a flat score bonus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BonusPair {
    /// Interest label.
    pub interest: String,
    /// Feeling label.
    pub feeling: String,
}

impl BonusPair {
    /// Creates a bonus pair from two labels.
    pub fn new(interest: impl Into<String>, feeling: impl Into<String>) -> Self {
        Self {
            interest: interest.into(),
            feeling: feeling.into(),
        }
    }
}

/// The complete set of hand-authored keyword data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    /// Interest label -> terms.
    pub interest: TermTable,
    /// Feeling label -> terms.
    pub feeling: TermTable,
    /// Style label -> terms.
    pub style: TermTable,
    /// Interest label -> terms that lower the score.
    pub penalty: TermTable,
    /// Pairs that earn the flat bonus.
    pub bonus_pairs: BTreeSet<BonusPair>,
    /// Interest label -> note attached to supplemented picks.
    pub related: BTreeMap<String, String>,
}

impl Dictionaries {
    /// Returns the built-in dictionaries.
    pub fn builtin() -> Self {
        Self {
            interest: table(INTEREST_TERMS),
            feeling: table(FEELING_TERMS),
            style: table(STYLE_TERMS),
            penalty: table(PENALTY_TERMS),
            bonus_pairs: BONUS_PAIRS
                .iter()
                .map(|(i, f)| BonusPair::new(i.label(), f.label()))
                .collect(),
            related: RELATED_HINTS
                .iter()
                .map(|(i, hint)| (i.label().to_string(), (*hint).to_string()))
                .collect(),
        }
    }

    /// Returns the term table for an axis.
    pub fn table(&self, axis: Axis) -> &TermTable {
        match axis {
            Axis::Interest => &self.interest,
            Axis::Feeling => &self.feeling,
            Axis::Style => &self.style,
        }
    }

    /// Terms for `label` on `axis`; unknown labels have no terms.
    pub fn terms(&self, axis: Axis, label: &str) -> &[String] {
        self.table(axis).get(label).map_or(&[], Vec::as_slice)
    }

    /// Penalty terms for an interest label.
    pub fn penalty_terms(&self, interest: &str) -> &[String] {
        self.penalty.get(interest).map_or(&[], Vec::as_slice)
    }

    /// Returns true if the combination earns the bonus.
    pub fn is_bonus_pair(&self, interest: &str, feeling: &str) -> bool {
        self.bonus_pairs
            .iter()
            .any(|p| p.interest == interest && p.feeling == feeling)
    }

    /// Hint shown next to supplemented picks for an interest, if any.
    pub fn related_hint(&self, interest: &str) -> Option<&str> {
        self.related.get(interest).map(String::as_str)
    }
}

/// Builds a term table from static data.
fn table<C: Category>(entries: &[(C, &[&str])]) -> TermTable {
    entries
        .iter()
        .map(|(category, terms)| {
            (
                category.label().to_string(),
                terms.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect()
}

/// Built-in interest terms.
const INTEREST_TERMS: &[(Interest, &[&str])] = &[
    (
        Interest::SelfUnderstanding,
        &["自己理解", "自分探し", "内省", "価値観", "自分軸", "問い", "質問"],
    ),
    (
        Interest::Habits,
        &["習慣", "ルーティン", "時間術", "ライフスタイル", "朝活", "手放す"],
    ),
    (
        Interest::Work,
        &["仕事", "キャリア", "ビジネス", "仕事術", "会社", "上司", "起業"],
    ),
    (
        Interest::Relationships,
        &["人間関係", "コミュニケーション", "聞く", "会話", "傾聴", "質問力"],
    ),
    (
        Interest::Romance,
        &["恋愛", "パートナー", "夫婦", "関係", "愛"],
    ),
    (
        Interest::Parenting,
        &["子育て", "教育", "親子", "先生", "学校", "子ども"],
    ),
    (
        Interest::MeaningOfLife,
        &["死", "人生の意味", "生き方", "幸福", "哲学"],
    ),
];

/// Built-in feeling terms.
const FEELING_TERMS: &[(Feeling, &[&str])] = &[
    (
        Feeling::Positive,
        &[
            "モチベーション",
            "前向き",
            "元気",
            "情熱",
            "やる気",
            "ポジティブ",
            "勇気",
            "こころ",
        ],
    ),
    (
        Feeling::Untangle,
        &[
            "モヤモヤ",
            "悩み",
            "整理",
            "手放す",
            "やめる",
            "断捨離",
            "不安",
            "整理する",
        ],
    ),
    (Feeling::Compass, &["自分軸", "価値観", "強み", "理想"]),
    (
        Feeling::Reconnect,
        &[
            "人間関係",
            "コミュニケーション",
            "傾聴",
            "会話",
            "上司",
            "部下",
            "パートナー",
            "恋愛",
        ],
    ),
    (
        Feeling::SmallStep,
        &["一歩", "背中を押す", "きっかけ", "スモールステップ"],
    ),
];

/// Built-in style terms. These name formats, not themes.
const STYLE_TERMS: &[(Style, &[&str])] = &[
    (
        Style::Light,
        &[
            "短編",
            "コラム",
            "要点",
            "まとめ",
            "Q&A",
            "箇条書き",
            "図解",
            "見開き",
            "マンガ",
            "読みやすい",
        ],
    ),
    (
        Style::Deep,
        &[
            "論考",
            "解説",
            "長文",
            "考察",
            "読み応え",
            "章末",
            "問いかけ",
            "エッセイ",
        ],
    ),
    (
        Style::Practical,
        &[
            "ワーク",
            "演習",
            "シート",
            "テンプレート",
            "チェックリスト",
            "ステップ",
            "手順",
            "実践ガイド",
        ],
    ),
];

/// Built-in penalty terms: words far from each theme.
const PENALTY_TERMS: &[(Interest, &[&str])] = &[
    (
        Interest::SelfUnderstanding,
        &[
            "恋愛",
            "パートナー",
            "夫婦",
            "子育て",
            "教育",
            "マーケティング",
            "起業",
            "ビジネス",
        ],
    ),
    (Interest::Habits, &["恋愛", "子育て", "マーケティング", "起業"]),
    (Interest::Work, &["恋愛", "子育て", "死", "死生観"]),
    (
        Interest::Relationships,
        &[
            "起業",
            "マーケティング",
            "マンダラ",
            "時間術",
            "子育て",
            "教育",
            "親子",
            "学校",
        ],
    ),
    (Interest::Romance, &["起業", "マーケティング", "仕事術"]),
    (Interest::Parenting, &["恋愛", "マーケティング", "起業"]),
    (
        Interest::MeaningOfLife,
        &["マーケティング", "起業", "恋愛", "子育て"],
    ),
];

/// Built-in bonus pairs.
const BONUS_PAIRS: &[(Interest, Feeling)] = &[
    (Interest::Work, Feeling::SmallStep),
    (Interest::SelfUnderstanding, Feeling::Compass),
    (Interest::Relationships, Feeling::Reconnect),
    (Interest::Romance, Feeling::Reconnect),
    (Interest::Habits, Feeling::Positive),
    (Interest::Habits, Feeling::SmallStep),
    (Interest::MeaningOfLife, Feeling::Untangle),
];

/// Built-in notes for supplemented picks.
const RELATED_HINTS: &[(Interest, &str)] = &[
    (
        Interest::Romance,
        "ちょっと毛色は違いますが、人間関係のヒントになるかもしれませんね。",
    ),
    (
        Interest::Parenting,
        "少し視点を変えて、教育の観点からも役立つかもしれませんね。",
    ),
    (
        Interest::MeaningOfLife,
        "自己理解のヒントとしても読めるかもしれませんね。",
    ),
    (
        Interest::Habits,
        "日々に取り入れやすい小さな気づきになるかもしれませんね。",
    ),
    (
        Interest::Work,
        "人との関わりの観点からも役立つかもしれませんね。",
    ),
];
