//! Implementation of `shiori vocab`.

use std::process::ExitCode;

use shiori_config::Axis;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader},
};

/// Lists each question's answers with slugs and term counts.
///
/// Labels defined only in config files are listed after the built-in ones.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let dictionaries = &ctx.config.dictionaries;

    for (n, axis) in Axis::ALL.into_iter().enumerate() {
        if n > 0 {
            println!();
        }
        println!("{}", subheader(&format!("{axis}:")));

        let entries = axis.entries();
        let width = entries.iter().map(|(slug, _, _)| slug.len()).max().unwrap_or(0);
        for (slug, label, gloss) in &entries {
            let terms = dictionaries.terms(axis, label).len();
            println!(
                "   {slug:<width$}  {label} {}",
                dim(&format!("({gloss}, {terms} terms)"))
            );
        }

        for (label, terms) in dictionaries.table(axis) {
            if !axis.is_builtin_label(label) {
                println!(
                    "   {:<width$}  {label} {}",
                    "",
                    dim(&format!("(custom, {} terms)", terms.len()))
                );
            }
        }
    }

    ExitCode::SUCCESS
}
