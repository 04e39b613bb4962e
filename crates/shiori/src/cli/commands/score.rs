//! Implementation of `shiori score`.

use std::process::ExitCode;

use crate::cli::{args::ScoreCommand, context::CommandContext, output::output_score_report};

/// Shows every book's score and the pool the selector would use.
pub fn run(ctx: &CommandContext, cmd: &ScoreCommand) -> ExitCode {
    let catalog = match ctx.load_catalog(cmd.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let selection = cmd.selection.to_selection();
    let report = ctx.recommender().score_all(&catalog, &selection);
    output_score_report(&report, &selection, cmd.json)
}
