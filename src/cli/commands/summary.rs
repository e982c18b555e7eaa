use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show total income, expenses, and balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new("chart", "Draw the income/expense chart", "chart", cmd_chart),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.tracker.totals();
    section("Summary");
    io::print_info(format!("  Total income  : {}", context.money(totals.income)));
    io::print_info(format!("  Total expenses: {}", context.money(totals.expenses)));
    io::print_info(format!("  Balance       : {}", context.money(totals.balance)));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.tracker.refresh();
    Ok(())
}
