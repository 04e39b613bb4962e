//! Rendering and JSON serialization for CLI output.

mod style;

use std::{collections::HashSet, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use shiori_engine::{
    MatchFlags, PoolTier, Recommendation, RecommendedBook, ScoreReport, Selection,
};
pub use style::{Highlighter, dim, header, indent_content, subheader, warning};

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a recommendation as text.
///
/// `hint` is the related-theme note shown under supplemented picks.
pub fn print_recommendation(rec: &Recommendation, hint: Option<&str>) {
    println!("{}", dim(&rec.selection.to_string()));
    println!();

    let Some((top, rest)) = rec.picks.split_first() else {
        println!("{}", dim("The catalog has no books."));
        return;
    };

    if rec.nothing_matched() {
        println!(
            "{}",
            warning("Few books fit this selection closely, so picks were drawn from the whole catalog.")
        );
        println!();
    }

    println!("{}", header("Top pick"));
    print!("{}", format_pick(top, hint));

    if !rest.is_empty() {
        println!();
        println!("{}", header("Also worth a look"));
        for pick in rest {
            print!("{}", format_pick(pick, hint));
        }
    }
}

/// Formats one pick as an indented block.
fn format_pick(pick: &RecommendedBook, hint: Option<&str>) -> String {
    let mut out = format!("  {}\n", subheader(&format!("『{}』", pick.book.title)));
    if pick.supplemented
        && let Some(note) = hint
    {
        out.push_str(&format!("  {}\n", dim(note)));
    }
    if !pick.book.description.is_empty() {
        out.push_str(&format!("  {}\n", pick.book.description));
    }
    if !pick.book.isbn.is_empty() {
        out.push_str(&format!("  {}\n", dim(&format!("ISBN {}", pick.book.isbn))));
    }
    out
}

/// Names of the signals that fired, in weight-table order.
pub fn signal_names(flags: &MatchFlags) -> Vec<&'static str> {
    [
        (flags.interest_keywords, "interest:keywords"),
        (flags.interest_title, "interest:title"),
        (flags.interest_description, "interest:description"),
        (flags.feeling_keywords, "feeling:keywords"),
        (flags.feeling_description, "feeling:description"),
        (flags.style_keywords, "style:keywords"),
        (flags.penalty_keywords, "penalty"),
        (flags.bonus_pair, "bonus"),
    ]
    .into_iter()
    .filter_map(|(fired, name)| fired.then_some(name))
    .collect()
}

/// JSON output for a single scored book.
#[derive(Serialize)]
struct JsonScoreRow<'a> {
    /// Book title.
    title: &'a str,
    /// Total score.
    score: i32,
    /// Signals that fired.
    matches: MatchFlags,
    /// True if the book is in the matched pool.
    matched: bool,
    /// True if the book is a candidate for picking.
    candidate: bool,
}

/// JSON output for `shiori score`.
#[derive(Serialize)]
struct JsonScoreOutput<'a> {
    /// The scored selection.
    selection: &'a Selection,
    /// Rule that produced the pool.
    tier: PoolTier,
    /// Size of the matched pool.
    matched: usize,
    /// Number of candidates; the whole catalog on fallback.
    candidates: usize,
    /// Every book in catalog order.
    books: Vec<JsonScoreRow<'a>>,
}

/// Outputs a score report as a table or JSON.
pub fn output_score_report(report: &ScoreReport<'_>, selection: &Selection, json: bool) -> ExitCode {
    let in_pool: HashSet<&str> = report
        .pool
        .matched()
        .iter()
        .map(|s| s.book.title.as_str())
        .collect();
    let candidates: HashSet<&str> = report
        .candidates()
        .iter()
        .map(|s| s.book.title.as_str())
        .collect();

    if json {
        let books = report
            .scored
            .iter()
            .map(|s| JsonScoreRow {
                title: &s.book.title,
                score: s.score,
                matches: s.matches,
                matched: in_pool.contains(s.book.title.as_str()),
                candidate: candidates.contains(s.book.title.as_str()),
            })
            .collect();
        return print_json(&JsonScoreOutput {
            selection,
            tier: report.pool.tier(),
            matched: in_pool.len(),
            candidates: candidates.len(),
            books,
        });
    }

    println!("{}", dim(&selection.to_string()));
    if report.scored.is_empty() {
        println!("{}", dim("The catalog has no books."));
        return ExitCode::SUCCESS;
    }

    let mut rows = report.scored.clone();
    rows.sort_by(|a, b| b.score.cmp(&a.score));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Title", "Score", "Pool", "Signals"]);
    for s in &rows {
        let title = s.book.title.as_str();
        let pool_mark = if in_pool.contains(title) {
            "*"
        } else if candidates.contains(title) {
            "+"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(&s.book.title),
            Cell::new(s.score).set_alignment(CellAlignment::Right),
            Cell::new(pool_mark).set_alignment(CellAlignment::Center),
            Cell::new(signal_names(&s.matches).join(", ")),
        ]);
    }
    println!("{table}");
    println!(
        "{}",
        dim(&format!(
            "─── {} books, tier {}, {} matched ───",
            rows.len(),
            report.pool.tier(),
            in_pool.len()
        ))
    );
    if report.pool.is_fallback() {
        println!("{}", dim("+ drawn on when fewer than three books match"));
    }
    ExitCode::SUCCESS
}
