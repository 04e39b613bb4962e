//! Implementation of `shiori recommend`.

use std::process::ExitCode;

use serde::Serialize;
use shiori_engine::{Recommendation, RngSource};

use crate::cli::{
    args::RecommendCommand,
    context::CommandContext,
    output::{print_json, print_recommendation},
};

/// JSON output for `shiori recommend`.
#[derive(Serialize)]
struct JsonRecommendation<'a> {
    /// The recommendation itself.
    #[serde(flatten)]
    recommendation: &'a Recommendation,
    /// Note for supplemented picks, if the interest has one.
    related_hint: Option<&'a str>,
}

/// Recommends three books for the selection.
pub fn run(ctx: &CommandContext, cmd: &RecommendCommand) -> ExitCode {
    let catalog = match ctx.load_catalog(cmd.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let selection = cmd.selection.to_selection();
    let recommender = ctx.recommender();
    let mut rng = match cmd.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::entropy(),
    };
    let recommendation = recommender.recommend(&catalog, &selection, &mut rng);
    let hint = recommender.related_hint(&selection);

    if cmd.json {
        return print_json(&JsonRecommendation {
            recommendation: &recommendation,
            related_hint: hint,
        });
    }

    print_recommendation(&recommendation, hint);
    ExitCode::SUCCESS
}
