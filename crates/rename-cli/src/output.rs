//! Terminal output for sessions

use colored::Colorize;
use rename_core::{
    Error, ReconcileReport, RenameObserver, RenamePlan, RenameStep, TracingObserver,
};

/// Prints each rename as it is applied, and logs it
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl RenameObserver for ConsoleObserver {
    fn step_started(&self, step: &RenameStep) {
        TracingObserver.step_started(step);
    }

    fn step_applied(&self, step: &RenameStep) {
        TracingObserver.step_applied(step);
        print_step(step);
    }

    fn step_failed(&self, step: &RenameStep, error: &Error) {
        TracingObserver.step_failed(step, error);
        eprintln!("{} {}", "!!".red().bold(), step);
    }
}

/// Temporary moves are dimmed, they are undone by a later restore
fn print_step(step: &RenameStep) {
    match step {
        RenameStep::Mangle { .. } => println!("{} {}", "  ~".dimmed(), step.to_string().dimmed()),
        _ => println!("{} {}", "=>".blue().bold(), step),
    }
}

pub fn print_plan(plan: &RenamePlan) {
    if plan.is_empty() {
        println!("{}", "Nothing to rename.".yellow());
        return;
    }

    println!("{}", "Would rename:".bold());
    for step in plan.steps() {
        print_step(step);
    }
    println!("{}", summary(plan.steps().len() - plan.mangled(), plan.mangled(), plan.unchanged()));
}

pub fn print_report(report: &ReconcileReport) {
    if report.renamed() == 0 {
        println!("{}", "Nothing to rename.".yellow());
        return;
    }
    println!(
        "{} {}",
        "Done.".green().bold(),
        summary(report.renamed(), report.mangled, report.unchanged)
    );
}

/// `renamed` counts every entry that changes name, including mangled ones.
fn summary(renamed: usize, mangled: usize, unchanged: usize) -> String {
    let noun = if renamed == 1 { "file" } else { "files" };
    let mut line = format!("{renamed} {noun} renamed");
    if mangled > 0 {
        line.push_str(&format!(", {mangled} via temporary names"));
    }
    if unchanged > 0 {
        line.push_str(&format!(", {unchanged} unchanged"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0, 0, "1 file renamed")]
    #[case(0, 0, 4, "0 files renamed, 4 unchanged")]
    #[case(3, 2, 0, "3 files renamed, 2 via temporary names")]
    #[case(2, 0, 5, "2 files renamed, 5 unchanged")]
    #[case(2, 2, 1, "2 files renamed, 2 via temporary names, 1 unchanged")]
    fn summary_mentions_only_nonzero_parts(
        #[case] renamed: usize,
        #[case] mangled: usize,
        #[case] unchanged: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(summary(renamed, mangled, unchanged), expected);
    }
}
