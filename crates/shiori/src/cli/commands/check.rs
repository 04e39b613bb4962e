//! Implementation of `shiori check`.

use std::process::ExitCode;

use shiori_catalog::load_catalog_with_report;
use shiori_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    args::CheckCommand,
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Lists config files, loads the catalog, and reports validation warnings.
///
/// Exits with failure if any warning is found or the catalog cannot be loaded.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using built-in defaults)"));
    } else {
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    let catalog_ok = print_catalog_status(ctx, cmd);
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        if catalog_ok {
            println!("No issues found.");
            return ExitCode::SUCCESS;
        }
        return ExitCode::FAILURE;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints the catalog section. Returns false if the catalog failed to load.
fn print_catalog_status(ctx: &CommandContext, cmd: &CheckCommand) -> bool {
    println!("{}", subheader("Catalog:"));
    let Some(path) = ctx.catalog_file(cmd.catalog.as_deref()) else {
        println!("   {}", dim("(none configured)"));
        return true;
    };

    match load_catalog_with_report(&path) {
        Ok((catalog, report)) => {
            println!(
                "   {} {}",
                path.display(),
                dim(&format!("({} books)", catalog.len()))
            );
            if report.duplicates > 0 {
                println!(
                    "   {}",
                    dim(&format!("{} duplicate titles dropped", report.duplicates))
                );
            }
            if report.untitled > 0 {
                println!(
                    "   {}",
                    dim(&format!("{} rows without a title dropped", report.untitled))
                );
            }
            if catalog.is_empty() {
                println!("   {}", warning("catalog has no books"));
            }
            true
        }
        Err(e) => {
            println!("   {}", warning(&e.to_string()));
            false
        }
    }
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::BonusUnknownLabel { .. } | ConfigWarning::HintUnknownLabel { .. } => {
                println!(
                    "{}",
                    dim("Hint: labels must match a key in [interest] or [feeling]")
                );
            }
            ConfigWarning::PoolCapBelowMin { .. } => {
                println!(
                    "{}",
                    dim("Hint: raise pool_cap or lower min_candidates under [selection]")
                );
            }
            ConfigWarning::WeightOutOfRange { .. } => {
                println!("{}", dim("Hint: keep [weights] values small, like the defaults"));
            }
            _ => {}
        }
    }
}
